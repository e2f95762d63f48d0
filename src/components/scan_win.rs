use yew::prelude::*;

use crate::components::icons;
use crate::config;
use crate::i18n::Language;

struct ScanWinText {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    how_to_title: &'static str,
    steps: [&'static str; 4],
    important: &'static str,
    scan_instructions: &'static str,
    closing_title: &'static str,
    closing_text: &'static str,
    closing_cta: &'static str,
}

const EN: ScanWinText = ScanWinText {
    title: "Scan & Win",
    subtitle: "QR Code Rewards",
    description: "Find Radar QR codes in partner stores and events to earn instant points and unlock exclusive rewards!",
    how_to_title: "How to Scan & Win:",
    steps: [
        "Download the Radar app",
        "Open the QR scanner inside the app",
        "Find QR codes at partner locations",
        "Scan and earn instant points!",
    ],
    important: "Important: QR codes must be scanned within the Radar app to receive points",
    scan_instructions: "Scan QR codes like this one to win points instantly!",
    closing_title: "Start Scanning & Winning Now!",
    closing_text: "Download the app and look for QR codes at partner stores to start earning points instantly",
    closing_cta: "Download App Now",
};

const AR: ScanWinText = ScanWinText {
    title: "امسح واربح",
    subtitle: "مكافآت رمز QR",
    description: "ابحث عن رموز QR الخاصة بـ رادار في المتاجر المشاركة والفعاليات لتحصل على نقاط فورية وتفتح مكافآت حصرية!",
    how_to_title: "كيفية المسح والربح:",
    steps: [
        "حمل تطبيق رادار",
        "افتح ماسح QR داخل التطبيق",
        "ابحث عن رموز QR في المواقع المشاركة",
        "امسح واحصل على نقاط فورية!",
    ],
    important: "مهم: يجب مسح رموز QR داخل تطبيق رادار لتحصل على النقاط",
    scan_instructions: "امسح رموز QR مثل هذا لتربح نقاط فوراً!",
    closing_title: "ابدأ المسح والربح الآن!",
    closing_text: "حمل التطبيق وابحث عن رموز QR في المتاجر المشاركة لتبدأ في جمع النقاط فوراً",
    closing_cta: "حمل التطبيق الآن",
};

fn text(language: Language) -> &'static ScanWinText {
    match language {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}

#[derive(Properties, PartialEq)]
pub struct ScanWinProps {
    pub language: Language,
}

#[function_component(ScanWin)]
pub fn scan_win(props: &ScanWinProps) -> Html {
    let t = text(props.language);

    html! {
        <section id="scan-win" class="scan-section" dir={props.language.dir()}>
            <div class="scan-inner">
                <div class="section-heading animate-on-scroll">
                    <div class="scan-heading-row">
                        { icons::qr_code_icon(32) }
                        <h2>{ t.title }</h2>
                    </div>
                    <p class="scan-subtitle">{ t.subtitle }</p>
                    <p class="scan-description">{ t.description }</p>
                    <div class="heading-underline"></div>
                </div>

                <div class="scan-grid">
                    <div class="animate-on-scroll">
                        <div class="qr-panel">
                            <h3>{ t.scan_instructions }</h3>
                            <div class="qr-display">
                                <img src="/images/scan_win.png" alt="Radar QR Code" />
                                <div class="scan-line"></div>
                            </div>
                        </div>
                    </div>

                    <div class="animate-on-scroll">
                        <div class="howto-panel">
                            <h3 class="howto-title">
                                { icons::smartphone_icon(24) }
                                { t.how_to_title }
                            </h3>
                            <div class="howto-steps">
                                {
                                    t.steps.iter().enumerate().map(|(index, step)| html! {
                                        <div key={*step} class="howto-step">
                                            <div class="howto-step-number">{ index + 1 }</div>
                                            <p>{ *step }</p>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>

                        <div class="scan-notice">
                            <p>{ format!("⚠️ {}", t.important) }</p>
                        </div>
                    </div>
                </div>

                <div class="scan-closing animate-on-scroll">
                    <h3>{ t.closing_title }</h3>
                    <p>{ t.closing_text }</p>
                    <a href={config::PLAY_STORE_URL} class="coral-button-link">
                        { t.closing_cta }
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .scan-section {
                    padding: 5rem 0;
                    background: linear-gradient(to bottom, #141414, #000);
                    position: relative;
                    overflow: hidden;
                }

                .scan-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .scan-heading-row {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    color: #ff6b5a;
                    margin-bottom: 1rem;
                }

                .scan-heading-row h2 {
                    font-size: 2.8rem;
                    font-weight: 700;
                    color: #fff;
                }

                .scan-subtitle {
                    font-size: 1.25rem;
                    color: #ff6b5a;
                    font-weight: 600;
                    margin-bottom: 1rem;
                    text-align: center;
                }

                .scan-description {
                    font-size: 1.1rem;
                    color: #ccc;
                    max-width: 48rem;
                    margin: 0 auto 1.5rem;
                    text-align: center;
                }

                .scan-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: center;
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .qr-panel {
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(255, 107, 90, 0.1);
                    border-radius: 1.5rem;
                    padding: 2rem;
                    text-align: center;
                }

                .qr-panel h3 {
                    color: #fff;
                    font-size: 1.4rem;
                    margin-bottom: 1.5rem;
                }

                .qr-display {
                    position: relative;
                    width: min(20rem, 100%);
                    margin: 0 auto;
                    background: #fff;
                    border-radius: 1rem;
                    padding: 1rem;
                    transition: transform 0.3s ease;
                }

                .qr-display:hover {
                    transform: scale(1.05);
                }

                .qr-display img {
                    width: 100%;
                    border-radius: 0.5rem;
                }

                .scan-line {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 4px;
                    background: linear-gradient(to right, transparent, #ff6b5a, transparent);
                    animation: pulse 2s ease-in-out infinite;
                }

                .howto-panel {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(255, 107, 90, 0.1);
                    border-radius: 1.25rem;
                    padding: 1.5rem;
                }

                .howto-title {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #fff;
                    font-size: 1.4rem;
                    margin-bottom: 1.5rem;
                }

                .howto-title svg {
                    color: #ff6b5a;
                }

                .howto-steps {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .howto-step {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                }

                .howto-step-number {
                    flex-shrink: 0;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #ff6b5a, #e4543f);
                    color: #fff;
                    font-weight: 700;
                    font-size: 0.85rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .howto-step p {
                    color: #ccc;
                    line-height: 1.6;
                }

                .scan-notice {
                    margin-top: 2rem;
                    background: rgba(255, 107, 90, 0.1);
                    border: 1px solid rgba(255, 107, 90, 0.3);
                    border-radius: 0.75rem;
                    padding: 1rem;
                }

                .scan-notice p {
                    color: #ffb4a8;
                    font-weight: 500;
                    text-align: center;
                }

                .scan-closing {
                    text-align: center;
                    margin-top: 4rem;
                    max-width: 42rem;
                    margin-left: auto;
                    margin-right: auto;
                }

                .scan-closing h3 {
                    font-size: 1.9rem;
                    color: #fff;
                    margin-bottom: 1rem;
                }

                .scan-closing p {
                    color: #ccc;
                    margin-bottom: 1.5rem;
                }

                .coral-button-link {
                    display: inline-block;
                    background: linear-gradient(90deg, #ff6b5a, #e4543f);
                    color: #fff;
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    font-weight: 600;
                    transition: all 0.3s ease;
                }

                .coral-button-link:hover {
                    transform: scale(1.05);
                    box-shadow: 0 8px 32px rgba(255, 107, 90, 0.3);
                }

                @media (min-width: 1024px) {
                    .scan-grid {
                        grid-template-columns: 1fr 1fr;
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
    fn step_lists_are_parallel() {
        assert_eq!(EN.steps.len(), AR.steps.len());
        for t in [&EN, &AR] {
            for step in &t.steps {
                assert!(!step.is_empty());
            }
        }
    }
}
