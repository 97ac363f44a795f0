use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LogoPreviewProps {
    /// Object URL of the selected logo file.
    pub url: String,
}

/// Local preview of the logo selected in the university form, shown before
/// any upload happens.
#[component]
pub fn LogoPreview(props: LogoPreviewProps) -> Element {
    rsx! {
        div {
            class: "logo-preview",
            img {
                src: "{props.url}",
                alt: "Logo preview"
            }
        }
    }
}
