use yew::prelude::*;

use crate::components::faq::FaqSection;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::how_it_works::HowItWorks;
use crate::components::partners::PartnersSection;
use crate::components::scan_win::ScanWin;
use crate::components::stats::StatsSection;
use crate::i18n::{self, Language};
use crate::scroll::{use_reveal_on_scroll, use_scroll_threshold};

/// Scroll offset at which the hero title hands off to the header.
const HERO_TITLE_OFFSET: f64 = 100.0;

#[function_component(Home)]
pub fn home() -> Html {
    // The page defaults to Arabic.
    let language = use_state(|| Language::Ar);
    let title_hidden = use_state(|| false);

    // Scroll to top only on initial mount.
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    // Every document-level side effect of a language change goes through
    // this one call site.
    use_effect_with_deps(
        |lang: &Language| {
            i18n::apply_to_document(*lang);
            || ()
        },
        *language,
    );

    use_reveal_on_scroll();

    use_scroll_threshold(HERO_TITLE_OFFSET, {
        let title_hidden = title_hidden.clone();
        Callback::from(move |engaged| title_hidden.set(engaged))
    });

    let on_language_change = {
        let language = language.clone();
        Callback::from(move |next: Language| {
            language.set(next);
        })
    };

    html! {
        <div class="landing-page">
            <Header
                language={*language}
                on_language_change={on_language_change}
                show_brand_title={*title_hidden}
            />

            <main>
                <Hero language={*language} title_hidden={*title_hidden} />
                <HowItWorks language={*language} />
                <PartnersSection language={*language} />
                <ScanWin language={*language} />
                <StatsSection language={*language} />
                <FaqSection language={*language} />
            </main>

            <Footer language={*language} />
        </div>
    }
}
