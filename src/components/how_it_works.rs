use yew::prelude::*;

use crate::i18n::Language;

struct Step {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
}

struct HowItWorksText {
    title: &'static str,
    cta: &'static str,
    steps: [Step; 3],
}

const EN: HowItWorksText = HowItWorksText {
    title: "Start Now",
    cta: "Get Started Today",
    steps: [
        Step {
            title: "Watch",
            subtitle: "Engaging Videos",
            description: "Discover and watch premium video content from our trusted partners and earn points for every minute watched.",
        },
        Step {
            title: "Earn",
            subtitle: "Valuable Points",
            description: "Accumulate points based on your viewing activity and engagement with the content throughout the platform.",
        },
        Step {
            title: "Exchange",
            subtitle: "Amazing Rewards",
            description: "Redeem your points for cash, gift cards, exclusive deals, and premium products from our partner network.",
        },
    ],
};

const AR: HowItWorksText = HowItWorksText {
    title: "ابدأ الآن",
    cta: "ابدأ اليوم",
    steps: [
        Step {
            title: "شاهد",
            subtitle: "فيديوهات جذابة",
            description: "اكتشف وشاهد محتوى فيديو مميز من شركائنا الموثوقين واكسب نقاط عن كل دقيقة مشاهدة.",
        },
        Step {
            title: "اكسب",
            subtitle: "نقاط قيمة",
            description: "اجمع النقاط بناءً على نشاط المشاهدة والتفاعل مع المحتوى عبر المنصة.",
        },
        Step {
            title: "استبدل",
            subtitle: "مكافآت رائعة",
            description: "استبدل نقاطك بأموال نقدية أو بطاقات هدايا أو عروض حصرية ومنتجات مميزة من شبكة شركائنا.",
        },
    ],
};

fn text(language: Language) -> &'static HowItWorksText {
    match language {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}

#[derive(Properties, PartialEq)]
pub struct HowItWorksProps {
    pub language: Language,
}

#[function_component(HowItWorks)]
pub fn how_it_works(props: &HowItWorksProps) -> Html {
    let t = text(props.language);

    html! {
        <section id="download" class="how-section" dir={props.language.dir()}>
            <div class="how-inner">
                <div class="section-heading animate-on-scroll">
                    <h2>{ t.title }</h2>
                    <div class="heading-underline"></div>
                </div>

                <div class="steps-grid">
                    {
                        t.steps.iter().enumerate().map(|(index, step)| html! {
                            <div
                                key={step.title}
                                class="step-card animate-on-scroll"
                                style={format!("transition-delay: {}ms", index * 200)}
                            >
                                <div class="step-number">
                                    <span>{ index + 1 }</span>
                                </div>
                                <h3>{ step.title }</h3>
                                <p class="step-subtitle">{ step.subtitle }</p>
                                <p class="step-description">{ step.description }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="how-cta animate-on-scroll">
                    <button class="coral-button">{ t.cta }</button>
                </div>
            </div>

            <style>
                {r#"
                .how-section {
                    padding: 5rem 0;
                    background: linear-gradient(to bottom, #000, #141414);
                    position: relative;
                    overflow: hidden;
                }

                .how-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    position: relative;
                    z-index: 10;
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-heading h2 {
                    font-size: 2.8rem;
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 1rem;
                }

                .heading-underline {
                    width: 6rem;
                    height: 4px;
                    background: #ff6b5a;
                    margin: 0 auto;
                    border-radius: 999px;
                }

                .steps-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                .step-card {
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(255, 107, 90, 0.1);
                    border-radius: 1.25rem;
                    padding: 2rem;
                    text-align: center;
                    transition: all 0.3s ease;
                }

                .step-card:hover {
                    transform: scale(1.05);
                    box-shadow: 0 16px 48px rgba(255, 107, 90, 0.2);
                }

                .step-number {
                    width: 5rem;
                    height: 5rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #ff6b5a, #e4543f);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .step-number span {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                }

                .step-card h3 {
                    font-size: 1.5rem;
                    color: #fff;
                    margin-bottom: 0.5rem;
                }

                .step-subtitle {
                    color: #ff6b5a;
                    font-weight: 500;
                    font-size: 1.1rem;
                    margin-bottom: 1rem;
                }

                .step-description {
                    color: #ccc;
                    line-height: 1.7;
                }

                .how-cta {
                    text-align: center;
                    margin-top: 4rem;
                }

                .coral-button {
                    background: linear-gradient(90deg, #ff6b5a, #e4543f);
                    color: #fff;
                    border: none;
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .coral-button:hover {
                    transform: scale(1.05);
                    box-shadow: 0 8px 32px rgba(255, 107, 90, 0.3);
                }

                @media (min-width: 768px) {
                    .steps-grid {
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
    fn step_tables_are_parallel() {
        assert_eq!(EN.steps.len(), AR.steps.len());
        for t in [&EN, &AR] {
            for step in &t.steps {
                assert!(!step.title.is_empty());
                assert!(!step.subtitle.is_empty());
                assert!(!step.description.is_empty());
            }
        }
    }
}
