use leptos::prelude::*;

/// Inline validation message rendered under a form field.
#[component]
pub fn FieldError(error: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|message| view! { <p class="form__error">{message}</p> })
    }
}
