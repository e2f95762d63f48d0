use yew::prelude::*;

use crate::components::icons;
use crate::config;
use crate::i18n::Language;

struct HeroText {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    app_store: &'static str,
    play_store: &'static str,
    direct_download: &'static str,
}

const EN: HeroText = HeroText {
    title: "Radar",
    subtitle: "Watch videos, earn rewards, and discover amazing content while getting paid for your time.",
    description: "Join thousands of users who are already earning points by watching engaging videos from our premium partners.",
    app_store: "App Store",
    play_store: "Google Play",
    direct_download: "Direct Download",
};

const AR: HeroText = HeroText {
    title: "رادار",
    subtitle: "شاهد الفيديوهات، اكسب المكافآت، واكتشف محتوى رائع بينما تحصل على أموال مقابل وقتك.",
    description: "انضم إلى آلاف المستخدمين الذين يكسبون النقاط بالفعل من خلال مشاهدة فيديوهات جذابة من شركائنا المميزين.",
    app_store: "متجر التطبيقات",
    play_store: "جوجل بلاي",
    direct_download: "تحميل مباشر",
};

fn text(language: Language) -> &'static HeroText {
    match language {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub language: Language,
    /// True once the page is scrolled past the title threshold; the
    /// header shows the brand title while this one is hidden.
    pub title_hidden: bool,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let t = text(props.language);

    let title_class = if props.title_hidden {
        "hero-title hidden"
    } else {
        "hero-title"
    };

    html! {
        <section id="home" class="hero-section" dir={props.language.dir()}>
            <div class="hero-glow top"></div>
            <div class="hero-glow bottom"></div>

            <div class="hero-inner">
                <div class="hero-copy animate-on-scroll">
                    <h1 class={title_class}>
                        <span class="hero-title-gradient">{ t.title }</span>
                    </h1>

                    <p class="hero-subtitle">{ t.subtitle }</p>
                    <p class="hero-description">{ t.description }</p>

                    <div class="store-buttons">
                        <button class="store-button dark">
                            { icons::app_store_icon(24) }
                            <span>{ t.app_store }</span>
                        </button>

                        <a class="store-button dark" href={config::PLAY_STORE_URL}>
                            { icons::google_play_icon(24) }
                            <span>{ t.play_store }</span>
                        </a>

                        <a class="store-button outline" href={config::DIRECT_DOWNLOAD_URL}>
                            { icons::smartphone_icon(20) }
                            <span>{ t.direct_download }</span>
                        </a>
                    </div>
                </div>

                <div class="hero-mockup animate-on-scroll">
                    <div class="phone-frame">
                        <div class="phone-screen">
                            <img src="/images/animated_radar.svg" alt="" />
                            <div class="phone-notch"></div>
                        </div>
                    </div>
                    <div class="floating-dot large"></div>
                    <div class="floating-dot small"></div>
                </div>
            </div>

            <div class="scroll-indicator">
                <div class="scroll-indicator-track">
                    <div class="scroll-indicator-thumb"></div>
                </div>
            </div>

            <style>
                {r#"
                .hero-section {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    position: relative;
                    overflow: hidden;
                    background: radial-gradient(circle at 30% 30%, rgba(255, 107, 90, 0.12), transparent 60%), #000;
                }

                .hero-glow {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(80px);
                    animation: float 6s ease-in-out infinite;
                }

                .hero-glow.top {
                    top: 5rem;
                    left: 5rem;
                    width: 16rem;
                    height: 16rem;
                    background: rgba(255, 107, 90, 0.2);
                }

                .hero-glow.bottom {
                    bottom: 5rem;
                    right: 5rem;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(255, 107, 90, 0.1);
                    animation-delay: 1s;
                }

                .hero-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 1rem 4rem;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: center;
                    position: relative;
                    z-index: 10;
                }

                .hero-title {
                    font-size: 4rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                    transition: all 0.5s cubic-bezier(0.34, 1.56, 0.64, 1);
                    opacity: 1;
                    transform: translateY(0) scale(1);
                }

                .hero-title.hidden {
                    opacity: 0;
                    transform: translateY(-2rem) scale(0.95);
                }

                .hero-title-gradient {
                    background: linear-gradient(45deg, #fff, #ff6b5a);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.4rem;
                    color: #ccc;
                    line-height: 1.6;
                    max-width: 40rem;
                    margin-bottom: 1rem;
                }

                .hero-description {
                    font-size: 1.05rem;
                    color: #999;
                    line-height: 1.6;
                    max-width: 34rem;
                }

                .store-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    padding-top: 2rem;
                }

                .store-button {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    min-width: 200px;
                    padding: 1rem 1.5rem;
                    border-radius: 10px;
                    font-size: 1rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .store-button.dark {
                    background: #111;
                    color: #fff;
                    border: 1px solid #222;
                }

                .store-button.dark:hover {
                    background: #1d1d1d;
                    transform: scale(1.05);
                }

                .store-button.outline {
                    background: transparent;
                    color: #ff6b5a;
                    border: 2px solid #ff6b5a;
                }

                .store-button.outline:hover {
                    background: #ff6b5a;
                    color: #fff;
                    transform: scale(1.05);
                }

                .hero-mockup {
                    position: relative;
                    display: flex;
                    justify-content: center;
                }

                .phone-frame {
                    width: 300px;
                    height: 580px;
                    background: linear-gradient(to bottom, #333, #111);
                    border-radius: 3rem;
                    padding: 8px;
                    box-shadow: 0 24px 64px rgba(0, 0, 0, 0.6);
                    animation: float 6s ease-in-out infinite;
                }

                .phone-screen {
                    width: 100%;
                    height: 100%;
                    background: #000;
                    border-radius: 2.5rem;
                    position: relative;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .phone-notch {
                    position: absolute;
                    top: 8px;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 8rem;
                    height: 1.5rem;
                    background: #000;
                    border-radius: 999px;
                }

                .floating-dot {
                    position: absolute;
                    border-radius: 50%;
                    animation: float 6s ease-in-out infinite;
                }

                .floating-dot.large {
                    top: -2rem;
                    left: -2rem;
                    width: 4rem;
                    height: 4rem;
                    background: rgba(255, 107, 90, 0.3);
                    animation-delay: 0.5s;
                }

                .floating-dot.small {
                    bottom: -2rem;
                    right: -2rem;
                    width: 3rem;
                    height: 3rem;
                    background: rgba(255, 107, 90, 0.2);
                    animation-delay: 1.5s;
                }

                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    animation: bounce 2s infinite;
                }

                .scroll-indicator-track {
                    width: 1.5rem;
                    height: 2.5rem;
                    border: 2px solid rgba(255, 255, 255, 0.5);
                    border-radius: 999px;
                    display: flex;
                    justify-content: center;
                }

                .scroll-indicator-thumb {
                    width: 4px;
                    height: 12px;
                    margin-top: 8px;
                    background: rgba(255, 255, 255, 0.5);
                    border-radius: 999px;
                    animation: pulse 2s ease-in-out infinite;
                }

                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-20px); }
                }

                @keyframes bounce {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, -10px); }
                }

                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.3; }
                }

                @media (min-width: 1024px) {
                    .hero-inner {
                        grid-template-columns: 7fr 5fr;
                    }

                    .hero-title {
                        font-size: 5.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_languages_fill_every_field() {
        for t in [&EN, &AR] {
            assert!(!t.title.is_empty());
            assert!(!t.subtitle.is_empty());
            assert!(!t.description.is_empty());
            assert!(!t.app_store.is_empty());
            assert!(!t.play_store.is_empty());
            assert!(!t.direct_download.is_empty());
        }
    }
}
