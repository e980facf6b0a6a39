use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or_else(|| AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    /// Shown under the input and linked to it for screen readers
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn TextField(props: &TextFieldProps) -> Html {
    let error_id = format!("{}-error", props.id);

    let oninput = props.oninput.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    let border = if props.error.is_some() {
        "border-red-500 dark:border-red-400"
    } else {
        "border-neutral-300 dark:border-neutral-600"
    };

    html! {
        <div>
            <label
                for={props.id.clone()}
                class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2"
            >
                {&props.label}
            </label>
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                autocomplete={props.autocomplete.clone()}
                disabled={props.disabled}
                aria-invalid={props.error.is_some().then_some("true")}
                aria-describedby={props.error.as_ref().map(|_| error_id.clone())}
                {oninput}
                class={classes!(
                    "w-full", "px-3", "py-2", "border", "rounded-md",
                    "bg-white", "dark:bg-neutral-900", "text-neutral-900", "dark:text-white",
                    "focus:outline-none", "focus:ring-2", "focus:ring-neutral-500",
                    border
                )}
            />
            if let Some(error) = &props.error {
                <p id={error_id} class="mt-1 text-sm text-red-600 dark:text-red-400">
                    {error.clone()}
                </p>
            }
        </div>
    }
}
