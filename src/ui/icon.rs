use leptos::prelude::*;

/// Icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
    /// Alt text; decorative icons leave it empty
    #[prop(default = "")]
    alt: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=alt
            aria-hidden=alt.is_empty().then_some("true")
            draggable=false
        />
    }
}

/// Icon names available under `public/icons`
pub mod icons {
    pub const PHONE: &str = "phone";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const CLOCK: &str = "clock";
    pub const INSTAGRAM: &str = "instagram";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const PLAY: &str = "play";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const EXTERNAL_LINK: &str = "external-link";
}
