use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub caption: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(DashboardCard)]
pub fn dashboard_card(props: &DashboardCardProps) -> Html {
    html! {
        <section class="dashboard-card">
            <h3 class="card-title">{props.title.clone()}</h3>
            <div class="card-value">{props.value.clone()}</div>
            {if let Some(caption) = &props.caption {
                html! { <p class="card-caption">{caption.clone()}</p> }
            } else { html! {} }}
            { props.children.clone() }
        </section>
    }
}
