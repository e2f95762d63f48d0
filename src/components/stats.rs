use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use yew::prelude::*;

use crate::config;
use crate::counter::{self, format_grouped, value_at, STEPS};
use crate::i18n::Language;
use crate::scroll::OneShot;

/// Viewport fraction of the section that arms the count-up.
const ARM_THRESHOLD: f64 = 0.3;

/// Fixed bar heights for the decorative dashboard chart.
const BAR_HEIGHTS: [u32; 12] = [55, 80, 35, 70, 45, 90, 60, 75, 40, 85, 50, 65];

#[derive(Clone, Copy)]
struct StatConfig {
    value: u64,
    label: &'static str,
    prefix: Option<&'static str>,
    suffix: Option<&'static str>,
}

struct StatsText {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    cta: &'static str,
    dashboard_title: &'static str,
    users: StatConfig,
    videos: StatConfig,
    rewards: StatConfig,
    partners: StatConfig,
}

const EN: StatsText = StatsText {
    title: "Grow Your Brand Through Engaging Video Content",
    subtitle: "Join our platform and reach millions of engaged users while providing valuable rewards for their time and attention.",
    description: "Our analytics dashboard provides real-time insights into user engagement, content performance, and reward distribution across our growing network.",
    cta: "Get Started",
    dashboard_title: "Analytics Dashboard",
    users: StatConfig {
        value: 250_000,
        label: "Active Users",
        prefix: None,
        suffix: Some("+"),
    },
    videos: StatConfig {
        value: 50_000,
        label: "Videos Watched",
        prefix: None,
        suffix: Some("+"),
    },
    rewards: StatConfig {
        value: 1_200_000,
        label: "Rewards Distributed",
        prefix: Some("$"),
        suffix: None,
    },
    partners: StatConfig {
        value: 150,
        label: "Partner Brands",
        prefix: None,
        suffix: Some("+"),
    },
};

const AR: StatsText = StatsText {
    title: "نمي علامتك التجارية من خلال محتوى فيديو جذاب",
    subtitle: "انضم إلى منصتنا وصل إلى ملايين المستخدمين المتفاعلين مع توفير مكافآت قيمة لوقتهم واهتمامهم.",
    description: "توفر لوحة التحليلات لدينا رؤى فورية حول تفاعل المستخدمين وأداء المحتوى وتوزيع المكافآت عبر شبكتنا المتنامية.",
    cta: "ابدأ الآن",
    dashboard_title: "لوحة التحليلات",
    users: StatConfig {
        value: 50_000,
        label: "مستخدم نشط",
        prefix: None,
        suffix: Some("+"),
    },
    videos: StatConfig {
        value: 2_000,
        label: "فيديو تمت مشاهدته",
        prefix: None,
        suffix: Some("+"),
    },
    rewards: StatConfig {
        value: 1_000,
        label: "عدد الجوائز الموزعة",
        prefix: None,
        suffix: Some("+"),
    },
    partners: StatConfig {
        value: 150,
        label: "علامة تجارية شريكة",
        prefix: None,
        suffix: Some("+"),
    },
};

fn text(language: Language) -> &'static StatsText {
    match language {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}

fn format_stat(value: u64, config: StatConfig) -> String {
    format!(
        "{}{}{}",
        config.prefix.unwrap_or(""),
        format_grouped(value),
        config.suffix.unwrap_or("")
    )
}

#[derive(Clone, PartialEq, Default)]
struct Counts {
    users: u64,
    videos: u64,
    rewards: u64,
    partners: u64,
}

#[derive(Properties, PartialEq)]
pub struct StatsSectionProps {
    pub language: Language,
}

#[function_component(StatsSection)]
pub fn stats_section(props: &StatsSectionProps) -> Html {
    let t = text(props.language);

    let section_ref = use_node_ref();
    let counts = use_state(Counts::default);
    let animated = use_state(|| false);
    // Arming survives language switches and effect re-runs: the count-up
    // plays once per page load.
    let armed = use_mut_ref(OneShot::default);
    let interval_handle = use_mut_ref(|| None::<Interval>);

    {
        let section_ref = section_ref.clone();
        let counts = counts.clone();
        let animated = animated.clone();
        let armed = armed.clone();
        let interval_handle = interval_handle.clone();
        let targets = [
            t.users.value,
            t.videos.value,
            t.rewards.value,
            t.partners.value,
        ];
        use_effect_with_deps(
            move |_| {
                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                        let intersecting = entries.iter().any(|entry| {
                            entry
                                .unchecked_into::<web_sys::IntersectionObserverEntry>()
                                .is_intersecting()
                        });
                        if intersecting && armed.borrow_mut().trigger() {
                            observer.disconnect();
                            animated.set(true);

                            let step = Rc::new(Cell::new(0u32));
                            let counts = counts.clone();
                            let handle_in_tick = interval_handle.clone();
                            let interval =
                                Interval::new(counter::tick_interval_ms(), move || {
                                    let current = step.get() + 1;
                                    step.set(current);
                                    counts.set(Counts {
                                        users: value_at(targets[0], current),
                                        videos: value_at(targets[1], current),
                                        rewards: value_at(targets[2], current),
                                        partners: value_at(targets[3], current),
                                    });
                                    // Last step landed exactly on the targets.
                                    if current >= STEPS {
                                        if let Some(interval) =
                                            handle_in_tick.borrow_mut().take()
                                        {
                                            drop(interval);
                                        }
                                    }
                                });
                            *interval_handle.borrow_mut() = Some(interval);
                        }
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

                let options = web_sys::IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from(ARM_THRESHOLD));
                let observer = web_sys::IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .unwrap();
                if let Some(element) = section_ref.cast::<web_sys::Element>() {
                    observer.observe(&element);
                }

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            props.language,
        );
    }

    let tiles = [
        (t.users, counts.users),
        (t.videos, counts.videos),
        (t.rewards, counts.rewards),
        (t.partners, counts.partners),
    ];

    html! {
        <section ref={section_ref} class="stats-section" dir={props.language.dir()}>
            <div class="stats-glow top"></div>
            <div class="stats-glow bottom"></div>

            <div class="stats-inner">
                <div class="stats-copy">
                    <h2>{ t.title }</h2>
                    <p class="stats-subtitle">{ t.subtitle }</p>
                    <p class="stats-description">{ t.description }</p>
                    <a
                        href={config::WHATSAPP_CONTACT_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="coral-button-link"
                    >
                        { t.cta }
                    </a>
                </div>

                <div class="dashboard-card">
                    <div class="dashboard-header">
                        <h3>{ t.dashboard_title }</h3>
                        <div class="dashboard-lights">
                            <div class="light orange"></div>
                            <div class="light yellow"></div>
                            <div class="light green"></div>
                        </div>
                    </div>

                    <div class="stats-grid">
                        {
                            tiles.into_iter().map(|(config, count)| html! {
                                <div key={config.label} class="stat-tile">
                                    <div class="stat-value">{ format_stat(count, config) }</div>
                                    <div class="stat-label">{ config.label }</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="dashboard-chart">
                        {
                            BAR_HEIGHTS.iter().enumerate().map(|(index, height)| {
                                let height = if *animated { *height } else { 0 };
                                html! {
                                    <div
                                        key={index}
                                        class="chart-bar"
                                        style={format!("height: {height}%")}
                                    ></div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .stats-section {
                    padding: 5rem 0;
                    background: linear-gradient(to bottom, #141414, #000);
                    position: relative;
                    overflow: hidden;
                }

                .stats-glow {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(80px);
                    animation: pulse 4s ease-in-out infinite;
                }

                .stats-glow.top {
                    top: 5rem;
                    right: 5rem;
                    width: 16rem;
                    height: 16rem;
                    background: rgba(255, 107, 90, 0.1);
                }

                .stats-glow.bottom {
                    bottom: 5rem;
                    left: 5rem;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(255, 107, 90, 0.05);
                    animation-delay: 1s;
                }

                .stats-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: center;
                    position: relative;
                    z-index: 10;
                }

                .stats-copy h2 {
                    font-size: 2.6rem;
                    font-weight: 700;
                    color: #fff;
                    line-height: 1.25;
                    margin-bottom: 1.5rem;
                }

                .stats-subtitle {
                    font-size: 1.2rem;
                    color: #ccc;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                .stats-description {
                    color: #999;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }

                .dashboard-card {
                    background: rgba(38, 38, 38, 0.5);
                    backdrop-filter: blur(8px);
                    border: 1px solid rgba(80, 80, 80, 0.5);
                    border-radius: 1.25rem;
                    padding: 1.5rem;
                    position: relative;
                    overflow: hidden;
                }

                .dashboard-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 1.5rem;
                }

                .dashboard-header h3 {
                    color: #fff;
                    font-size: 1.1rem;
                    font-weight: 600;
                }

                .dashboard-lights {
                    display: flex;
                    gap: 0.5rem;
                }

                .light {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    animation: pulse 2s ease-in-out infinite;
                }

                .light.orange { background: #f97316; }
                .light.yellow { background: #eab308; animation-delay: 0.5s; }
                .light.green { background: #22c55e; animation-delay: 1s; }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }

                .stat-tile {
                    background: rgba(17, 17, 17, 0.5);
                    border: 1px solid rgba(70, 70, 70, 0.3);
                    border-radius: 0.75rem;
                    padding: 1rem;
                    text-align: center;
                    transition: all 0.3s ease;
                }

                .stat-tile:hover {
                    border-color: rgba(255, 107, 90, 0.3);
                }

                .stat-value {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fb923c;
                    margin-bottom: 0.25rem;
                }

                .stat-label {
                    font-size: 0.85rem;
                    color: #999;
                }

                .dashboard-chart {
                    background: rgba(17, 17, 17, 0.5);
                    border: 1px solid rgba(70, 70, 70, 0.3);
                    border-radius: 0.75rem;
                    padding: 1rem;
                    height: 12rem;
                    display: flex;
                    align-items: flex-end;
                    justify-content: space-between;
                    gap: 0.5rem;
                }

                .chart-bar {
                    width: 1rem;
                    border-radius: 4px 4px 0 0;
                    background: linear-gradient(to top, #f97316, #fb923c);
                    transition: height 1s ease-out;
                }

                @media (min-width: 1024px) {
                    .stats-inner {
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
    fn stat_tables_are_parallel_and_positive() {
        for t in [&EN, &AR] {
            for config in [t.users, t.videos, t.rewards, t.partners] {
                assert!(config.value > 0);
                assert!(!config.label.is_empty());
            }
        }
    }

    #[test]
    fn formatting_applies_prefix_and_suffix() {
        assert_eq!(format_stat(250_000, EN.users), "250,000+");
        assert_eq!(format_stat(1_200_000, EN.rewards), "$1,200,000");
        assert_eq!(format_stat(0, AR.videos), "0+");
    }
}
