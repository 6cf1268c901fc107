use crate::components::Footer::*;
use leptos::prelude::*;

#[component]
pub fn Page(children: Children) -> impl IntoView {
    view! {
        <div class="overflow-x-hidden bg-background text-foreground">{children()} <Footer/></div>
    }
}
