//! SVG Icon Components
//!
//! Provides inline SVG icons for use throughout the dashboard.

use leptos::*;

/// Icon size variants
#[derive(Debug, Clone, Copy, Default)]
pub enum IconSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl IconSize {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Sm => "icon-sm",
            Self::Md => "icon-md",
            Self::Lg => "icon-lg",
            Self::Xl => "icon-xl",
        }
    }

    pub fn size(&self) -> u32 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
            Self::Xl => 32,
        }
    }
}

/// Base icon component
#[component]
fn IconBase(
    #[prop(into)] path: String,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let s = size.size();
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=s
            height=s
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=format!("icon {} {}", size.class(), class)
            inner_html=path
        />
    }
}

#[component]
pub fn IconActivity(#[prop(default = IconSize::Md)] size: IconSize, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <IconBase path=r#"<path d="M22 12h-4l-3 9L9 3l-3 9H2"/>"#.to_string() size=size class=class /> }
}

#[component]
pub fn IconShield(#[prop(default = IconSize::Md)] size: IconSize, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <IconBase path=r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#.to_string() size=size class=class /> }
}

#[component]
pub fn IconPieChart(#[prop(default = IconSize::Md)] size: IconSize, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <IconBase path=r#"<path d="M21.21 15.89A10 10 0 1 1 8 2.83"/><path d="M22 12A10 10 0 0 0 12 2v10z"/>"#.to_string() size=size class=class /> }
}

#[component]
pub fn IconBarChart(#[prop(default = IconSize::Md)] size: IconSize, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <IconBase path=r#"<line x1="12" x2="12" y1="20" y2="10"/><line x1="18" x2="18" y1="20" y2="4"/><line x1="6" x2="6" y1="20" y2="16"/>"#.to_string() size=size class=class /> }
}

#[component]
pub fn IconLineChart(#[prop(default = IconSize::Md)] size: IconSize, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <IconBase path=r#"<path d="M3 3v18h18"/><path d="m19 9-5 5-4-4-3 3"/>"#.to_string() size=size class=class /> }
}

#[component]
pub fn IconCheckCircle(#[prop(default = IconSize::Md)] size: IconSize, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <IconBase path=r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><polyline points="22 4 12 14.01 9 11.01"/>"#.to_string() size=size class=class /> }
}

#[component]
pub fn IconXCircle(#[prop(default = IconSize::Md)] size: IconSize, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <IconBase path=r#"<circle cx="12" cy="12" r="10"/><path d="m15 9-6 6"/><path d="m9 9 6 6"/>"#.to_string() size=size class=class /> }
}

#[component]
pub fn IconInfo(#[prop(default = IconSize::Md)] size: IconSize, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <IconBase path=r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#.to_string() size=size class=class /> }
}

#[component]
pub fn IconX(#[prop(default = IconSize::Md)] size: IconSize, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <IconBase path=r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#.to_string() size=size class=class /> }
}

#[component]
pub fn IconZap(#[prop(default = IconSize::Md)] size: IconSize, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <IconBase path=r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#.to_string() size=size class=class /> }
}

#[component]
pub fn IconDatabase(#[prop(default = IconSize::Md)] size: IconSize, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <IconBase path=r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5V19A9 3 0 0 0 21 19V5"/><path d="M3 12A9 3 0 0 0 21 12"/>"#.to_string() size=size class=class /> }
}

#[component]
pub fn IconSun(#[prop(default = IconSize::Md)] size: IconSize, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <IconBase path=r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#.to_string() size=size class=class /> }
}

#[component]
pub fn IconMoon(#[prop(default = IconSize::Md)] size: IconSize, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <IconBase path=r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#.to_string() size=size class=class /> }
}
