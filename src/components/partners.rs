use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::i18n::Language;
use crate::partners::{fetch_partners, Partner};

/// Card width plus horizontal margins, used to size the carousel track.
const CARD_SLOT_PX: usize = 224;
/// The track is repeated this many times for a seamless loop.
const CAROUSEL_SETS: usize = 3;

struct PartnersText {
    title: &'static str,
    subtitle: &'static str,
    offers: &'static str,
    rewards: &'static str,
    benefits: [(&'static str, &'static str); 3],
}

const EN: PartnersText = PartnersText {
    title: "Our Partners",
    subtitle: "Trusted by leading brands to deliver premium content and valuable rewards to our users.",
    offers: "Offers",
    rewards: "Rewards",
    benefits: [
        (
            "Premium Content",
            "High-quality videos from trusted brands and content creators.",
        ),
        (
            "Exclusive Rewards",
            "Special offers and rewards available only through our partner network.",
        ),
        (
            "Trusted Brands",
            "Partnership with established and reputable companies.",
        ),
    ],
};

const AR: PartnersText = PartnersText {
    title: "شركاؤنا",
    subtitle: "موثوق من قبل العلامات التجارية لتقديم محتوى مميز ومكافآت قيمة لمستخدمينا.",
    offers: "عروض",
    rewards: "جوائز",
    benefits: [
        (
            "محتوى مميز",
            "فيديوهات عالية الجودة من علامات تجارية موثوقة ومنشئي محتوى مميزين.",
        ),
        (
            "مكافآت حصرية",
            "عروض ومكافآت خاصة متاحة حصرياً من خلال شبكة شركائنا.",
        ),
        (
            "علامات موثوقة",
            "شراكة مع شركات راسخة وذات سمعة طيبة.",
        ),
    ],
};

fn text(language: Language) -> &'static PartnersText {
    match language {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}

fn partner_card(partner: &Partner, set_index: usize, t: &PartnersText) -> Html {
    html! {
        <div key={format!("set-{set_index}-partner-{}", partner.id)} class="partner-card">
            <div class="partner-image">
                {
                    if partner.image.is_empty() {
                        html! {
                            <div class="partner-image-placeholder">
                                <div class="placeholder-box"></div>
                            </div>
                        }
                    } else {
                        html! { <img src={partner.image.clone()} alt={partner.name.clone()} loading="lazy" /> }
                    }
                }
            </div>
            <div class="partner-info">
                <div>
                    <h3>{ &partner.name }</h3>
                    <p class="partner-category">{ &partner.category.name }</p>
                </div>
                {
                    if partner.counts.rewards > 0 || partner.counts.offers > 0 {
                        html! {
                            <div class="partner-badges">
                                {
                                    if partner.counts.rewards > 0 {
                                        html! {
                                            <span class="badge rewards">
                                                { format!("{} {}", partner.counts.rewards, t.rewards) }
                                            </span>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                                {
                                    if partner.counts.offers > 0 {
                                        html! {
                                            <span class="badge offers">
                                                { format!("{} {}", partner.counts.offers, t.offers) }
                                            </span>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PartnersSectionProps {
    pub language: Language,
}

#[function_component(PartnersSection)]
pub fn partners_section(props: &PartnersSectionProps) -> Html {
    let t = text(props.language);

    let partners = use_state(Vec::<Partner>::new);
    let loading = use_state(|| true);

    {
        let partners = partners.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let list = fetch_partners().await;
                    partners.set(list);
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let track_class = if props.language.is_rtl() {
        "carousel-track slide-rtl"
    } else {
        "carousel-track slide-ltr"
    };
    let track_width = CAROUSEL_SETS * partners.len() * CARD_SLOT_PX;

    html! {
        <section id="partners" class="partners-section" dir={props.language.dir()}>
            <div class="partners-inner">
                <div class="section-heading animate-on-scroll">
                    <h2>{ t.title }</h2>
                    <p>{ t.subtitle }</p>
                    <div class="heading-underline"></div>
                </div>

                <div class="carousel animate-on-scroll">
                    {
                        if *loading {
                            html! {
                                <div class="carousel-loading">
                                    { for (0..4).map(|i| html! { <div key={i} class="loading-card"></div> }) }
                                </div>
                            }
                        } else {
                            html! {
                                <div class="carousel-window">
                                    <div
                                        class={track_class}
                                        style={format!("width: {track_width}px")}
                                    >
                                        {
                                            (0..CAROUSEL_SETS).flat_map(|set_index| {
                                                partners.iter().map(move |partner| partner_card(partner, set_index, t))
                                            }).collect::<Html>()
                                        }
                                    </div>
                                </div>
                            }
                        }
                    }
                    <div class="carousel-mask start"></div>
                    <div class="carousel-mask end"></div>
                </div>

                <div class="benefits-grid animate-on-scroll">
                    {
                        t.benefits.iter().map(|(title, description)| html! {
                            <div key={*title} class="benefit-card">
                                <div class="benefit-icon">
                                    <div class="benefit-dot"></div>
                                </div>
                                <h3>{ *title }</h3>
                                <p>{ *description }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .partners-section {
                    padding: 5rem 0;
                    background: linear-gradient(to bottom, #141414, #000);
                    position: relative;
                    overflow: hidden;
                }

                .partners-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .partners-section .section-heading p {
                    font-size: 1.2rem;
                    color: #ccc;
                    max-width: 48rem;
                    margin: 0 auto 1.5rem;
                    line-height: 1.6;
                }

                .carousel {
                    position: relative;
                    padding: 2rem 0;
                }

                .carousel-window {
                    overflow: hidden;
                }

                .carousel-track {
                    display: flex;
                }

                .carousel-track:hover {
                    animation-play-state: paused;
                }

                .slide-ltr {
                    animation: slide-ltr 40s linear infinite;
                }

                .slide-rtl {
                    animation: slide-rtl 40s linear infinite;
                }

                @keyframes slide-ltr {
                    from { transform: translateX(0); }
                    to { transform: translateX(-33.333%); }
                }

                @keyframes slide-rtl {
                    from { transform: translateX(0); }
                    to { transform: translateX(33.333%); }
                }

                .carousel-loading {
                    display: flex;
                    gap: 2rem;
                    justify-content: center;
                }

                .loading-card {
                    width: 192px;
                    height: 192px;
                    border-radius: 0.75rem;
                    background: rgba(40, 40, 40, 0.6);
                    animation: pulse 1.5s ease-in-out infinite;
                }

                .partner-card {
                    flex-shrink: 0;
                    width: 192px;
                    height: 192px;
                    margin: 1rem;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(80, 80, 80, 0.5);
                    display: flex;
                    flex-direction: column;
                    transition: all 0.5s ease;
                }

                .partner-card:hover {
                    transform: scale(1.05);
                    border-color: rgba(255, 107, 90, 0.3);
                    box-shadow: 0 16px 48px rgba(255, 107, 90, 0.25);
                }

                .partner-image {
                    height: 110px;
                    background: linear-gradient(135deg, #2a2a2a, #1c1c1c);
                    position: relative;
                    overflow: hidden;
                }

                .partner-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .partner-image-placeholder {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .placeholder-box {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 0.4rem;
                    background: rgba(255, 107, 90, 0.4);
                }

                .partner-info {
                    flex: 1;
                    padding: 0.75rem 1rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                }

                .partner-info h3 {
                    color: #fff;
                    font-size: 0.9rem;
                    margin-bottom: 0.25rem;
                }

                .partner-category {
                    color: #999;
                    font-size: 0.75rem;
                }

                .partner-badges {
                    display: flex;
                    gap: 0.3rem;
                    flex-wrap: wrap;
                }

                .badge {
                    font-size: 0.7rem;
                    padding: 0.15rem 0.5rem;
                    border-radius: 999px;
                }

                .badge.rewards {
                    background: rgba(22, 101, 52, 0.4);
                    color: #86efac;
                    border: 1px solid rgba(21, 128, 61, 0.3);
                }

                .badge.offers {
                    background: rgba(30, 58, 138, 0.4);
                    color: #93c5fd;
                    border: 1px solid rgba(29, 78, 216, 0.3);
                }

                .carousel-mask {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 6rem;
                    pointer-events: none;
                    z-index: 10;
                }

                .carousel-mask.start {
                    left: 0;
                    background: linear-gradient(to right, #141414, transparent);
                }

                .carousel-mask.end {
                    right: 0;
                    background: linear-gradient(to left, #141414, transparent);
                }

                .benefits-grid {
                    margin-top: 4rem;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                .benefit-card {
                    text-align: center;
                }

                .benefit-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    background: rgba(255, 107, 90, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .benefit-dot {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: #ff6b5a;
                }

                .benefit-card h3 {
                    color: #fff;
                    font-size: 1.25rem;
                    margin-bottom: 0.75rem;
                }

                .benefit-card p {
                    color: #999;
                    line-height: 1.6;
                }

                @media (min-width: 768px) {
                    .benefits-grid {
                        grid-template-columns: repeat(3, 1fr);
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
    fn benefit_tables_are_parallel() {
        assert_eq!(EN.benefits.len(), AR.benefits.len());
        for t in [&EN, &AR] {
            for (title, description) in &t.benefits {
                assert!(!title.is_empty());
                assert!(!description.is_empty());
            }
        }
    }
}
