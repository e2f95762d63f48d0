use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons;
use crate::config;
use crate::i18n::Language;

struct FaqItem {
    question: &'static str,
    answer: &'static str,
}

struct FaqText {
    title: &'static str,
    subtitle: &'static str,
    still_questions: &'static str,
    contact_support: &'static str,
    items: [FaqItem; 11],
}

const EN: FaqText = FaqText {
    title: "Frequently Asked Questions about the Radar App",
    subtitle: "Find answers to the most common questions about our platform.",
    still_questions: "Still have questions? We're here to help!",
    contact_support: "Contact Support",
    items: [
        FaqItem {
            question: "What is the Radar app?",
            answer: "Radar is an innovative app that combines entertaining ads with rewards: users watch reels (short clips) from participating stores, discover offers and prizes, and earn points they can exchange for real rewards.",
        },
        FaqItem {
            question: "How do I set my interests inside the app?",
            answer: "When you first sign up you can pick your interests from several categories (such as fashion, technology, food...) and reels and offers matching those interests will be shown to you.",
        },
        FaqItem {
            question: "What are reels in the Radar app?",
            answer: "Reels are short promotional videos from participating stores, or entertainment clips from Radar, and points are granted for watching them.",
        },
        FaqItem {
            question: "What is the \"weekly gem\" and how can I win it?",
            answer: "Each week a gem is hidden inside a random reel. The first user to watch that reel wins the gem automatically and receives bonus points predefined by Radar.",
        },
        FaqItem {
            question: "What is the \"prize store\"?",
            answer: "It is a section inside the app where you can exchange your points for real prizes provided by participating stores or by Radar, such as coupons, products, or special gifts.",
        },
        FaqItem {
            question: "How do I use the \"Scan & Win - QR\" feature?",
            answer: "Look for Radar QR codes inside participating stores or at events, then scan them with the app to earn instant points.",
        },
        FaqItem {
            question: "What is the offers-and-stores radar?",
            answer: "The radar is an interactive feature that lets you discover exclusive offers and stores within a radius you choose (for example 4 km); nearby offers and stores are shown directly on the map.",
        },
        FaqItem {
            question: "How do I see all the stores participating in Radar?",
            answer: "In the \"All Stores\" section you can browse every store participating in the app, with active stores offering more offers and prizes highlighted.",
        },
        FaqItem {
            question: "Do I need to create an account to use the app?",
            answer: "Yes, a free account is required to personalize your experience, track your points, join contests, and buy prizes from the store.",
        },
        FaqItem {
            question: "Do reels expire?",
            answer: "Yes, each reel is shown for a limited period agreed between Radar and the store behind the ad.",
        },
        FaqItem {
            question: "How can I increase my chances of earning points and gems?",
            answer: "Keep watching new reels. Be among the first to watch reels each week. Scan QR codes when they are available. Follow the radar to find offers near you.",
        },
    ],
};

const AR: FaqText = FaqText {
    title: "الأسئلة الشائعة عن تطبيق رادار (Radar)",
    subtitle: "اعثر على إجابات للأسئلة الأكثر شيوعاً حول منصتنا.",
    still_questions: "لا تزال لديك أسئلة؟ نحن هنا للمساعدة!",
    contact_support: "تواصل مع الدعم",
    items: [
        FaqItem {
            question: "ما هو تطبيق رادار (Radar)؟",
            answer: "رادار هو تطبيق مبتكر يجمع بين الإعلانات الترفيهية والمكافآت، حيث يمكن للمستخدمين مشاهدة ريلزات (مقاطع قصيرة) لمتاجر مشاركة، واكتشاف عروض وجوائز، وربح نقاط يمكن استبدالها بجوائز حقيقية.",
        },
        FaqItem {
            question: "كيف أحدد اهتماماتي داخل التطبيق؟",
            answer: "عند التسجيل لأول مرة، يمكنك اختيار اهتماماتك من عدة تصنيفات (مثل: الأزياء، التكنولوجيا، الطعام...) وسيتم عرض ريلزات وعروض تتناسب مع هذه الاهتمامات.",
        },
        FaqItem {
            question: "ما هي الريلزات في تطبيق رادار؟",
            answer: "الريلزات هي مقاطع فيديو قصيرة تمثل إعلانات ترويجية من المتاجر المشاركة، أو مقاطع ترفيهية من Radar، وتُمنح نقاط مقابل مشاهدتها.",
        },
        FaqItem {
            question: "ما هي \"الجوهرة الأسبوعية\" وكيف يمكنني ربحها؟",
            answer: "كل أسبوع يتم إخفاء جوهرة داخل ريلز عشوائي، وأول مستخدم يشاهد هذا الريلز سيربح الجوهرة تلقائيًا، وتُمنح له نقاط إضافية محددة مسبقًا من Radar.",
        },
        FaqItem {
            question: "ما هو \"متجر الجوائز\"؟",
            answer: "هو قسم داخل التطبيق يمكنك من خلاله استبدال نقاطك بجوائز حقيقية مقدمة من المتاجر المشاركة أو من Radar، مثل كوبونات، منتجات، أو هدايا مميزة.",
        },
        FaqItem {
            question: "كيف أستخدم ميزة \"امسح واربح – QR\"؟",
            answer: "ابحث عن رموز QR الخاصة بـ Radar داخل المتاجر المشاركة أو الفعاليات، ثم امسحها باستخدام التطبيق لربح نقاط فورية.",
        },
        FaqItem {
            question: "ما هو \"رادار العروض والمتاجر\"؟",
            answer: "رادار هو ميزة تفاعلية تمكنك من اكتشاف عروض حصرية ومتاجر ضمن نطاق جغرافي تختاره (مثلاً 4 كيلومتر)، ويتم عرض العروض والمتاجر القريبة مباشرة على الخريطة.",
        },
        FaqItem {
            question: "كيف أرى جميع المتاجر المشتركة في Radar؟",
            answer: "داخل قسم \"جميع المتاجر\"، يمكنك استعراض كل المتاجر المشاركة في التطبيق، ويتم إبراز المتاجر النشطة التي تقدم عروض وجوائز أكثر.",
        },
        FaqItem {
            question: "هل أحتاج إلى إنشاء حساب لاستخدام التطبيق؟",
            answer: "نعم، يلزم إنشاء حساب مجاني لتخصيص تجربتك، تتبع نقاطك، المشاركة في المسابقات، وشراء الجوائز من المتجر.",
        },
        FaqItem {
            question: "هل تنتهي صلاحية الريلزات؟",
            answer: "نعم، كل ريلز يظهر لفترة زمنية محددة يتم تحديدها بناءً على الاتفاق بين Radar والمتجر صاحب الإعلان.",
        },
        FaqItem {
            question: "كيف يمكنني زيادة فرص ربحي للنقاط والجواهر؟",
            answer: "شاهد ريلزات جديدة باستمرار. كن من أوائل من يشاهدون الريلزات كل أسبوع. امسح رموز QR عند توفرها. تابع الرادار للعثور على عروض قريبة منك.",
        },
    ],
};

fn text(language: Language) -> &'static FaqText {
    match language {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    pub language: Language,
}

#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    let t = text(props.language);

    // At most one item open at a time.
    let open_item = use_state(|| None::<usize>);

    html! {
        <section id="faqs" class="faq-section" dir={props.language.dir()}>
            <div class="faq-inner">
                <div class="section-heading animate-on-scroll">
                    <h2>{ t.title }</h2>
                    <p>{ t.subtitle }</p>
                    <div class="heading-underline"></div>
                </div>

                <div class="faq-grid">
                    {
                        t.items.iter().enumerate().map(|(index, item)| {
                            let is_open = *open_item == Some(index);
                            let toggle = {
                                let open_item = open_item.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    open_item.set(if is_open { None } else { Some(index) });
                                })
                            };
                            html! {
                                <div
                                    key={item.question}
                                    class={classes!("faq-item", "animate-on-scroll", is_open.then(|| "open"))}
                                    style={format!("transition-delay: {}ms", index * 100)}
                                >
                                    <button class="faq-question" onclick={toggle}>
                                        <h3>{ item.question }</h3>
                                        <span class="faq-chevron">{ icons::chevron_down_icon(20) }</span>
                                    </button>
                                    <div class="faq-answer">
                                        <p>{ item.answer }</p>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="faq-footer animate-on-scroll">
                    <p>{ t.still_questions }</p>
                    <a href={config::WHATSAPP_CONTACT_URL}>
                        <button class="coral-button">{ t.contact_support }</button>
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .faq-section {
                    padding: 5rem 0;
                    background: linear-gradient(to bottom, #000, #141414);
                    position: relative;
                    overflow: hidden;
                }

                .faq-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .faq-section .section-heading p {
                    font-size: 1.2rem;
                    color: #ccc;
                    max-width: 48rem;
                    margin: 0 auto 1.5rem;
                }

                .faq-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .faq-item {
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(255, 107, 90, 0.1);
                    border-radius: 0.75rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item:hover {
                    box-shadow: 0 8px 32px rgba(255, 107, 90, 0.1);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    text-align: start;
                    transition: background 0.2s ease;
                }

                .faq-question:hover {
                    background: rgba(255, 255, 255, 0.05);
                }

                .faq-question h3 {
                    color: #fff;
                    font-size: 1.1rem;
                    font-weight: 600;
                }

                .faq-chevron {
                    color: #ff6b5a;
                    flex-shrink: 0;
                    display: flex;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .faq-chevron {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: #ccc;
                    line-height: 1.7;
                }

                .faq-footer {
                    text-align: center;
                    margin-top: 4rem;
                }

                .faq-footer p {
                    color: #999;
                    margin-bottom: 1.5rem;
                }

                @media (min-width: 1024px) {
                    .faq-grid {
                        grid-template-columns: repeat(2, 1fr);
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
    fn faq_tables_are_parallel() {
        assert_eq!(EN.items.len(), AR.items.len());
        for t in [&EN, &AR] {
            for item in &t.items {
                assert!(!item.question.is_empty());
                assert!(!item.answer.is_empty());
            }
        }
    }
}
