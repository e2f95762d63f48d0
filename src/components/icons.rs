//! Inline SVG icons shared across sections.

use yew::prelude::*;

pub fn app_store_icon(size: u32) -> Html {
    html! {
        <svg width={size.to_string()} height={size.to_string()} viewBox="0 0 24 24" fill="currentColor">
            <path d="M18.71 19.5c-.83 1.24-1.71 2.45-3.05 2.47-1.34.03-1.77-.79-3.29-.79-1.53 0-2 .77-3.27.82-1.31.05-2.3-1.32-3.14-2.53C4.25 17 2.94 12.45 4.7 9.39c.87-1.52 2.43-2.48 4.12-2.51 1.28-.02 2.5.87 3.29.87.78 0 2.26-1.07 3.81-.91.65.03 2.47.26 3.64 1.98-.09.06-2.17 1.28-2.15 3.81.03 3.02 2.65 4.03 2.68 4.04-.03.07-.42 1.44-1.38 2.83M13 3.5c.73-.83 1.94-1.46 2.94-1.5.13 1.17-.34 2.35-1.04 3.19-.69.85-1.83 1.51-2.95 1.42-.15-1.15.41-2.35 1.05-3.11z" />
        </svg>
    }
}

pub fn google_play_icon(size: u32) -> Html {
    html! {
        <svg width={size.to_string()} height={size.to_string()} viewBox="0 0 24 24" fill="currentColor">
            <path d="M3,20.5V3.5C3,2.91 3.34,2.39 3.84,2.15L13.69,12L3.84,21.85C3.34,21.61 3,21.09 3,20.5M16.81,15.12L6.05,21.34L14.54,12.85L16.81,15.12M20.16,10.81C20.5,11.08 20.75,11.5 20.75,12C20.75,12.5 20.53,12.9 20.18,13.18L17.89,14.5L15.39,12L17.89,9.5L20.16,10.81M6.05,2.66L16.81,8.88L14.54,11.15L6.05,2.66Z" />
        </svg>
    }
}

fn stroked(size: u32, body: Html) -> Html {
    html! {
        <svg
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            { body }
        </svg>
    }
}

pub fn smartphone_icon(size: u32) -> Html {
    stroked(size, html! {
        <>
            <rect x="5" y="2" width="14" height="20" rx="2" ry="2" />
            <line x1="12" y1="18" x2="12.01" y2="18" />
        </>
    })
}

pub fn menu_icon(size: u32) -> Html {
    stroked(size, html! {
        <>
            <line x1="3" y1="6" x2="21" y2="6" />
            <line x1="3" y1="12" x2="21" y2="12" />
            <line x1="3" y1="18" x2="21" y2="18" />
        </>
    })
}

pub fn close_icon(size: u32) -> Html {
    stroked(size, html! {
        <>
            <line x1="18" y1="6" x2="6" y2="18" />
            <line x1="6" y1="6" x2="18" y2="18" />
        </>
    })
}

pub fn chevron_down_icon(size: u32) -> Html {
    stroked(size, html! { <polyline points="6 9 12 15 18 9" /> })
}

pub fn mail_icon(size: u32) -> Html {
    stroked(size, html! {
        <>
            <rect x="2" y="4" width="20" height="16" rx="2" />
            <path d="m22 7-10 5L2 7" />
        </>
    })
}

pub fn phone_icon(size: u32) -> Html {
    stroked(size, html! {
        <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.79 19.79 0 0 1 2.08 4.18 2 2 0 0 1 4.06 2h3a2 2 0 0 1 2 1.72c.12.81.3 1.6.54 2.37a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.71-1.06a2 2 0 0 1 2.11-.45c.77.24 1.56.42 2.37.54a2 2 0 0 1 1.72 2.03z" />
    })
}

pub fn map_pin_icon(size: u32) -> Html {
    stroked(size, html! {
        <>
            <path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z" />
            <circle cx="12" cy="10" r="3" />
        </>
    })
}

pub fn instagram_icon(size: u32) -> Html {
    stroked(size, html! {
        <>
            <rect x="2" y="2" width="20" height="20" rx="5" ry="5" />
            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
            <line x1="17.5" y1="6.5" x2="17.51" y2="6.5" />
        </>
    })
}

pub fn facebook_icon(size: u32) -> Html {
    stroked(size, html! {
        <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" />
    })
}

pub fn twitter_icon(size: u32) -> Html {
    stroked(size, html! {
        <path d="M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z" />
    })
}

pub fn youtube_icon(size: u32) -> Html {
    stroked(size, html! {
        <>
            <path d="M22.54 6.42a2.78 2.78 0 0 0-1.94-2C18.88 4 12 4 12 4s-6.88 0-8.6.46a2.78 2.78 0 0 0-1.94 2A29 29 0 0 0 1 11.75a29 29 0 0 0 .46 5.33A2.78 2.78 0 0 0 3.4 19c1.72.46 8.6.46 8.6.46s6.88 0 8.6-.46a2.78 2.78 0 0 0 1.94-2 29 29 0 0 0 .46-5.25 29 29 0 0 0-.46-5.33z" />
            <polygon points="9.75 15.02 15.5 11.75 9.75 8.48" />
        </>
    })
}

pub fn qr_code_icon(size: u32) -> Html {
    html! {
        <svg width={size.to_string()} height={size.to_string()} viewBox="0 0 24 24" fill="none">
            <rect x="3" y="3" width="8" height="8" stroke="currentColor" stroke-width="1.5" rx="1" />
            <rect x="13" y="3" width="8" height="8" stroke="currentColor" stroke-width="1.5" rx="1" />
            <rect x="3" y="13" width="8" height="8" stroke="currentColor" stroke-width="1.5" rx="1" />
            <rect x="5" y="5" width="4" height="4" fill="currentColor" rx="0.5" />
            <rect x="15" y="5" width="4" height="4" fill="currentColor" rx="0.5" />
            <rect x="5" y="15" width="4" height="4" fill="currentColor" rx="0.5" />
            <rect x="13" y="13" width="2" height="2" fill="currentColor" />
            <rect x="17" y="13" width="2" height="2" fill="currentColor" />
            <rect x="19" y="15" width="2" height="2" fill="currentColor" />
            <rect x="15" y="17" width="2" height="2" fill="currentColor" />
            <rect x="19" y="19" width="2" height="2" fill="currentColor" />
            <rect x="13" y="17" width="2" height="2" fill="currentColor" />
            <rect x="17" y="19" width="2" height="2" fill="currentColor" />
        </svg>
    }
}
