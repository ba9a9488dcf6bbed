use crate::theme::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
}

#[function_component(SettingsView)]
pub(crate) fn settings_view(props: &SettingsProps) -> Html {
    fn theme_switcher(label: &'static str, theme: Option<Theme>) -> Html {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            Theme::apply(theme);
        });
        html! {
            <li><a href="#" {onclick}>{label}</a></li>
        }
    }

    html! {
        <dialog id="settings" open={props.open}>
            <article>
                <h2>{"Settings"}</h2>
                <ul>
                    { theme_switcher("Auto", None) }
                    { theme_switcher("Light", Some(Theme::Light)) }
                    { theme_switcher("Dark", Some(Theme::Dark)) }
                </ul>
            </article>
        </dialog>
    }
}
