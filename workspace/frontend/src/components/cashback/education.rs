use yew::prelude::*;
use super::layout::Education;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub education: Education,
}

#[function_component(CashbackEducation)]
pub fn cashback_education(props: &Props) -> Html {
    let education = &props.education;

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">
                    <i class="fas fa-graduation-cap"></i>
                    {&education.title}
                </h2>
                <p class="text-sm">{&education.intro}</p>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-3 mt-2">
                    {for education.categories.iter().map(|badge| html! {
                        <div class="flex items-center gap-3" key={badge.name.clone()}>
                            <i
                                class={classes!("fas", badge.icon.clone(), "w-5")}
                                style={format!("color: {}", badge.color)}
                            ></i>
                            <span class="flex-1">{&badge.name}</span>
                            <span class="badge badge-primary badge-outline">{&badge.rate_label}</span>
                        </div>
                    })}
                </div>
                <p class="text-xs text-base-content/60 mt-4">{&education.footer}</p>
            </div>
        </div>
    }
}
