use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons;
use crate::i18n::Language;
use crate::scroll::use_scroll_threshold;

/// Scroll offset past which the bar gains its glass background.
const GLASS_OFFSET: f64 = 50.0;

struct HeaderText {
    home: &'static str,
    download: &'static str,
    about: &'static str,
    partners: &'static str,
    faqs: &'static str,
    join: &'static str,
    contact: &'static str,
}

const EN: HeaderText = HeaderText {
    home: "Home",
    download: "Download Now",
    about: "About Us",
    partners: "Our Partners",
    faqs: "FAQs",
    join: "Join Us",
    contact: "Contact Us",
};

const AR: HeaderText = HeaderText {
    home: "الرئيسية",
    download: "تحميل الآن",
    about: "من نحن",
    partners: "شركاؤنا",
    faqs: "الأسئلة الشائعة",
    join: "انضم إلينا",
    contact: "تواصل معنا",
};

fn text(language: Language) -> &'static HeaderText {
    match language {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}

fn nav_links(t: &'static HeaderText) -> [(&'static str, &'static str); 7] {
    [
        (t.home, "#home"),
        (t.download, "#download"),
        (t.about, "#about"),
        (t.partners, "#partners"),
        (t.faqs, "#faqs"),
        (t.join, "#join"),
        (t.contact, "#contact"),
    ]
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub language: Language,
    pub on_language_change: Callback<Language>,
    /// True while the hero title is scrolled away and the bar shows the
    /// brand title instead.
    pub show_brand_title: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let language = props.language;
    let t = text(language);

    let is_scrolled = use_state(|| false);
    let menu_open = use_state(|| false);

    use_scroll_threshold(GLASS_OFFSET, {
        let is_scrolled = is_scrolled.clone();
        Callback::from(move |engaged| is_scrolled.set(engaged))
    });

    let toggle_language = {
        let on_language_change = props.on_language_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_language_change.emit(language.toggled());
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let brand_title_class = if props.show_brand_title {
        "brand-title shown"
    } else {
        "brand-title"
    };

    html! {
        <header
            class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}
            dir={language.dir()}
        >
            <div class="header-content">
                <div class="header-brand">
                    <img src="/images/radar.png" alt="radar_logo" class="header-logo" />
                    <span class={brand_title_class}>{ language.brand_title() }</span>
                </div>

                <nav class="desktop-nav">
                    {
                        nav_links(t).into_iter().map(|(label, href)| html! {
                            <a key={href} href={href} class="nav-link">{label}</a>
                        }).collect::<Html>()
                    }
                </nav>

                <div class="header-actions">
                    <button class="language-switch" onclick={toggle_language}>
                        <span class={classes!("switch-knob", language.is_rtl().then(|| "ar"))}>
                            { language.code().to_uppercase() }
                        </span>
                        <span class="switch-label en">{"EN"}</span>
                        <span class="switch-label ar">{"AR"}</span>
                    </button>

                    <button class="burger-menu" onclick={toggle_menu}>
                        { if *menu_open { icons::close_icon(24) } else { icons::menu_icon(24) } }
                    </button>
                </div>
            </div>

            <div class={classes!("mobile-nav", (*menu_open).then(|| "open"))}>
                {
                    nav_links(t).into_iter().map(|(label, href)| html! {
                        <a key={href} href={href} class="mobile-nav-link" onclick={close_menu.clone()}>
                            {label}
                        </a>
                    }).collect::<Html>()
                }
            </div>

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }

                .site-header.scrolled {
                    background: rgba(10, 10, 10, 0.8);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 4px 24px rgba(0, 0, 0, 0.4);
                }

                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 64px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .header-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .header-logo {
                    max-width: 48px;
                    max-height: 48px;
                }

                .brand-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    opacity: 0;
                    transform: translateY(-8px) scale(0.95);
                    transition: all 0.5s cubic-bezier(0.34, 1.56, 0.64, 1);
                }

                .brand-title.shown {
                    opacity: 1;
                    transform: translateY(0) scale(1);
                }

                .desktop-nav {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    color: #fff;
                    font-size: 0.95rem;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #ff6b5a;
                }

                .header-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .language-switch {
                    position: relative;
                    width: 64px;
                    height: 32px;
                    border-radius: 999px;
                    border: 2px solid #555;
                    background: #333;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .language-switch:hover {
                    transform: scale(1.05);
                }

                .switch-knob {
                    position: absolute;
                    top: 2px;
                    left: 2px;
                    width: 24px;
                    height: 24px;
                    border-radius: 50%;
                    background: #fff;
                    color: #222;
                    font-size: 0.65rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: all 0.2s ease;
                }

                .switch-knob.ar {
                    left: auto;
                    right: 2px;
                }

                .switch-label {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    font-size: 0.6rem;
                    color: #999;
                }

                .switch-label.en { left: 8px; }
                .switch-label.ar { right: 8px; }

                .burger-menu {
                    background: none;
                    border: none;
                    color: #fff;
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                }

                .mobile-nav {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.3s ease;
                    padding: 0 1rem;
                }

                .mobile-nav.open {
                    max-height: 400px;
                    opacity: 1;
                    padding-bottom: 1rem;
                }

                .mobile-nav-link {
                    display: block;
                    padding: 0.6rem 1rem;
                    color: #fff;
                    border-radius: 8px;
                }

                .mobile-nav-link:hover {
                    color: #ff6b5a;
                    background: rgba(255, 255, 255, 0.1);
                }

                @media (min-width: 1024px) {
                    .desktop-nav { display: flex; }
                    .burger-menu { display: none; }
                    .mobile-nav { display: none; }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_languages_fill_every_nav_label() {
        for t in [&EN, &AR] {
            for (label, href) in nav_links(t) {
                assert!(!label.is_empty());
                assert!(href.starts_with('#'));
            }
        }
    }
}
