use i18nrs::yew::use_translation;
use yew::prelude::*;

use crate::components::store_manager::StoreManager;
use crate::components::user_profile_form::UserProfileForm;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Profile,
    Stores,
}

/// Dashboard of a regular user: own profile and own stores.
#[function_component(UserDashboardPage)]
pub fn user_dashboard_page() -> Html {
    let (i18n, ..) = use_translation();
    let tab = use_state(|| Tab::Profile);

    let tab_button = |target: Tab, label: String| {
        let tab = tab.clone();
        let class = classes!("tab", (*tab == target).then_some("tab-active"));
        html! {
            <a role="tab" {class} onclick={move |_| tab.set(target)}>{label}</a>
        }
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{i18n.t("dashboard.title")}</h1>
            <div role="tablist" class="tabs tabs-boxed w-fit">
                {tab_button(Tab::Profile, i18n.t("dashboard.profile"))}
                {tab_button(Tab::Stores, i18n.t("dashboard.stores"))}
            </div>
            {
                match *tab {
                    Tab::Profile => html! { <UserProfileForm /> },
                    Tab::Stores => html! { <StoreManager /> },
                }
            }
        </div>
    }
}
