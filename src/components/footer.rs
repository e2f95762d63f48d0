use yew::prelude::*;

use crate::components::icons;
use crate::config;
use crate::i18n::Language;

struct FooterText {
    company: &'static str,
    description: &'static str,
    downloads: &'static str,
    contact: &'static str,
    app_store: &'static str,
    play_store: &'static str,
    direct_download: &'static str,
    qr_code: &'static str,
    email_label: &'static str,
    phone_label: &'static str,
    address_label: &'static str,
    address: &'static str,
    copyright: &'static str,
    privacy: &'static str,
    terms: &'static str,
    follow_us: &'static str,
}

const CONTACT_EMAIL: &str = "radar@anycode-sy.com";
const CONTACT_PHONE: &str = "+963968972764";

const EN: FooterText = FooterText {
    company: "Radar",
    description: "The premier platform for earning rewards through engaging video content. Join millions of users who are already discovering amazing content and earning valuable rewards.",
    downloads: "Downloads",
    contact: "Contact Us",
    app_store: "Download on App Store",
    play_store: "Get it on Google Play",
    direct_download: "Direct Download",
    qr_code: "Scan QR Code",
    email_label: "Email",
    phone_label: "Phone",
    address_label: "Address",
    address: "Syria,Aleppo Martini",
    copyright: "© 2024 Radar. All rights reserved.",
    privacy: "Privacy Policy",
    terms: "Terms of Service",
    follow_us: "Follow Us",
};

const AR: FooterText = FooterText {
    company: "رادار",
    description: "المنصة الرائدة لكسب المكافآت من خلال محتوى الفيديو الجذاب. انضم إلى ملايين المستخدمين الذين يكتشفون بالفعل محتوى رائع ويكسبون مكافآت قيمة.",
    downloads: "التحميلات",
    contact: "تواصل معنا",
    app_store: "تحميل من متجر التطبيقات",
    play_store: "تحميل من جوجل بلاي",
    direct_download: "تحميل مباشر",
    qr_code: "امسح رمز QR",
    email_label: "البريد الإلكتروني",
    phone_label: "الهاتف",
    address_label: "العنوان",
    address: "سوريا-حلب-مارتيني أمام فندق كواترو",
    copyright: "© 2024 رادار. جميع الحقوق محفوظة.",
    privacy: "سياسة الخصوصية",
    terms: "شروط الخدمة",
    follow_us: "تابعنا",
};

fn text(language: Language) -> &'static FooterText {
    match language {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub language: Language,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let t = text(props.language);

    html! {
        <footer id="contact" class="site-footer" dir={props.language.dir()}>
            <div class="footer-glow top"></div>
            <div class="footer-glow bottom"></div>

            <div class="footer-inner">
                <div class="footer-columns">
                    <div class="footer-company animate-on-scroll">
                        <div class="footer-brand">
                            <img src="/images/radar.png" alt="radar_logo" class="footer-logo" />
                            <span class="footer-brand-name">{ t.company }</span>
                        </div>

                        <p class="footer-description">{ t.description }</p>

                        <div>
                            <h4>{ t.follow_us }</h4>
                            <div class="social-links">
                                <a href="https://www.instagram.com/radar_sy" target="_blank" rel="noopener noreferrer" class="social-link">
                                    { icons::instagram_icon(20) }
                                </a>
                                <a href="https://www.facebook.com/share/1KBa8AAJEF/" target="_blank" rel="noopener noreferrer" class="social-link">
                                    { icons::facebook_icon(20) }
                                </a>
                                <a href="#" class="social-link">
                                    { icons::twitter_icon(20) }
                                </a>
                                <a href="#" class="social-link">
                                    { icons::youtube_icon(20) }
                                </a>
                            </div>
                        </div>
                    </div>

                    <div class="footer-downloads animate-on-scroll">
                        <h3>{ t.downloads }</h3>

                        <div class="download-buttons">
                            <button class="store-button dark">
                                { icons::app_store_icon(20) }
                                <span>{ t.app_store }</span>
                            </button>

                            <a class="store-button dark" href={config::PLAY_STORE_URL}>
                                { icons::google_play_icon(20) }
                                <span>{ t.play_store }</span>
                            </a>

                            <a class="store-button outline" href={config::DIRECT_DOWNLOAD_URL}>
                                { icons::smartphone_icon(20) }
                                <span>{ t.direct_download }</span>
                            </a>
                        </div>

                        <div class="qr-card">
                            <div class="qr-card-image">
                                <img src="/images/qrcode.jpeg" alt="" />
                            </div>
                            <p>{ t.qr_code }</p>
                        </div>
                    </div>

                    <div class="footer-contact animate-on-scroll">
                        <h3>{ t.contact }</h3>

                        <div class="contact-rows">
                            <div class="contact-row">
                                <div class="contact-icon">{ icons::mail_icon(14) }</div>
                                <div>
                                    <p class="contact-label">{ t.email_label }</p>
                                    <a href={format!("mailto:{CONTACT_EMAIL}")} class="contact-value">
                                        { CONTACT_EMAIL }
                                    </a>
                                </div>
                            </div>

                            <div class="contact-row">
                                <div class="contact-icon">{ icons::phone_icon(14) }</div>
                                <div>
                                    <p class="contact-label">{ t.phone_label }</p>
                                    <a href={format!("tel:{CONTACT_PHONE}")} class="contact-value">
                                        { CONTACT_PHONE }
                                    </a>
                                </div>
                            </div>

                            <div class="contact-row">
                                <div class="contact-icon">{ icons::map_pin_icon(14) }</div>
                                <div>
                                    <p class="contact-label">{ t.address_label }</p>
                                    <p class="contact-value">{ t.address }</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{ t.copyright }</p>
                    <div class="footer-legal">
                        <a href="#">{ t.privacy }</a>
                        <a href="#">{ t.terms }</a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: linear-gradient(to bottom, #0a0a0a, #000);
                    position: relative;
                    overflow: hidden;
                }

                .footer-glow {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(80px);
                }

                .footer-glow.top {
                    top: 0;
                    left: 0;
                    width: 16rem;
                    height: 16rem;
                    background: rgba(255, 107, 90, 0.05);
                }

                .footer-glow.bottom {
                    bottom: 0;
                    right: 0;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(255, 107, 90, 0.1);
                }

                .footer-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    position: relative;
                    z-index: 10;
                }

                .footer-columns {
                    padding: 4rem 0;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                }

                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }

                .footer-logo {
                    max-width: 48px;
                    max-height: 48px;
                }

                .footer-brand-name {
                    font-size: 1.8rem;
                    font-weight: 700;
                }

                .footer-description {
                    color: #ccc;
                    line-height: 1.6;
                    max-width: 28rem;
                    margin-bottom: 1.5rem;
                }

                .footer-company h4 {
                    margin-bottom: 1rem;
                }

                .social-links {
                    display: flex;
                    gap: 1rem;
                }

                .social-link {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: background 0.3s ease;
                }

                .social-link:hover {
                    background: #ff6b5a;
                }

                .footer-downloads h3,
                .footer-contact h3 {
                    font-size: 1.5rem;
                    margin-bottom: 1.5rem;
                }

                .download-buttons {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    align-items: flex-start;
                    margin-bottom: 1.5rem;
                }

                .qr-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(255, 107, 90, 0.1);
                    border-radius: 0.75rem;
                    padding: 1rem;
                    width: fit-content;
                }

                .qr-card-image {
                    width: 8rem;
                    height: 8rem;
                    border-radius: 0.5rem;
                    background: linear-gradient(135deg, #4a4a4a, #333);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    margin-bottom: 0.5rem;
                }

                .qr-card-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .qr-card p {
                    font-size: 0.85rem;
                    color: #999;
                    text-align: center;
                }

                .contact-rows {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }

                .contact-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                }

                .contact-icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 0.25rem;
                    background: #ff6b5a;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                    margin-top: 0.25rem;
                }

                .contact-label {
                    font-weight: 500;
                    margin-bottom: 0.25rem;
                }

                .contact-value {
                    color: #ccc;
                    line-height: 1.6;
                    transition: color 0.2s ease;
                }

                a.contact-value:hover {
                    color: #ff6b5a;
                }

                .footer-bottom {
                    border-top: 1px solid #262626;
                    padding: 2rem 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    align-items: center;
                }

                .footer-bottom p {
                    color: #999;
                }

                .footer-legal {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-legal a {
                    color: #999;
                    transition: color 0.2s ease;
                }

                .footer-legal a:hover {
                    color: #ff6b5a;
                }

                @media (min-width: 1024px) {
                    .footer-columns {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .footer-bottom {
                        flex-direction: row;
                        justify-content: space-between;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_languages_share_contact_details() {
        for t in [&EN, &AR] {
            assert!(!t.company.is_empty());
            assert!(!t.copyright.is_empty());
            assert!(!t.address.is_empty());
        }
        assert!(CONTACT_EMAIL.contains('@'));
        assert!(CONTACT_PHONE.starts_with('+'));
    }
}
