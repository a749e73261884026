pub(crate) mod admin_profile_form;
pub(crate) mod alert;
pub(crate) mod comment_modal;
pub(crate) mod footer;
pub(crate) mod header_nav_item;
pub(crate) mod language_selector;
pub(crate) mod language_selector_button;
pub(crate) mod loading;
pub(crate) mod modal;
pub(crate) mod pagination;
pub(crate) mod price_tag;
pub(crate) mod product_form_modal;
pub(crate) mod product_list;
pub(crate) mod protected_route;
pub(crate) mod rating_stars;
pub(crate) mod store_form_modal;
pub(crate) mod store_manager;
pub(crate) mod stores_table;
pub(crate) mod tag_modal;
pub(crate) mod text_field;
pub(crate) mod toast;
pub(crate) mod user_dropdown;
pub(crate) mod user_profile_form;
pub(crate) mod users_table;
