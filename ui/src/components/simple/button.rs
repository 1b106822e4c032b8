use dioxus::prelude::*;

const GRADIENT: &str = "bg-gradient-to-r from-[#4481e0] via-[#248fa9] to-[#20939f] hover:from-[#3a6fc0] hover:via-[#1f7a8f] hover:to-[#1a7d8a] text-white font-semibold";

#[derive(Clone, PartialEq, Default)]
pub enum ButtonVariant {
    /// Header call-to-action with glow and shine.
    #[default]
    Emphasized,
    /// Full width, used in stacked menus.
    Block,
}

impl ButtonVariant {
    fn get_classes(&self) -> &'static str {
        match self {
            ButtonVariant::Emphasized => "px-8 py-2.5 shadow-lg hover:shadow-2xl hover:shadow-[#4481e0]/50 transition-all duration-300 hover:scale-105 relative overflow-hidden group animate-pulse-glow",
            ButtonVariant::Block => "w-full px-4 py-2.5",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    children: Element,
    #[props(optional, default)]
    variant: ButtonVariant,
    #[props(optional, into)]
    class: String,
}

#[component]
pub fn Button(props: Props) -> Element {
    let variant_classes = props.variant.get_classes();
    let additional_classes = props.class;

    rsx! {
        button {
            class: "{GRADIENT} {variant_classes} {additional_classes} rounded-md cursor-pointer",
            if props.variant == ButtonVariant::Emphasized {
                span { class: "relative z-10 flex items-center gap-2", {props.children} }
                span { class: "absolute inset-0 bg-white opacity-0 group-hover:opacity-20 transition-opacity duration-300" }
                span { class: "absolute -inset-1 bg-gradient-to-r from-[#4481e0] via-[#248fa9] to-[#20939f] opacity-0 group-hover:opacity-100 blur-lg transition-opacity duration-300 -z-10" }
                span { class: "absolute inset-0 bg-gradient-to-r from-transparent via-white/40 to-transparent -translate-x-full group-hover:translate-x-full transition-transform duration-1000" }
            } else {
                {props.children}
            }
        }
    }
}
