use crate::constants::CATEGORY_COLORS;
use crate::model::{AdCategory, AdData};
use crate::registry::{AdDraft, AdRegistry};
use crate::storage::BrowserStorage;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AdManagerPanelProps {
    pub on_update: Callback<()>,
    pub on_close: Callback<()>,
}

fn registry() -> AdRegistry<BrowserStorage> {
    AdRegistry::new(BrowserStorage)
}

const INPUT_STYLE: &str = "padding:8px 10px; background:#0d1117; color:#e6edf3; border:1px solid #30363d; border-radius:6px; font-size:13px; width:100%; box-sizing:border-box;";
const SMALL_BUTTON: &str = "padding:4px 10px; background:#21262d; color:#e6edf3; border:1px solid #30363d; border-radius:6px; cursor:pointer; font-size:12px;";

/// Advertiser back office: CRUD over registered ads and custom categories,
/// all persisted through the registry.
#[function_component(AdManagerPanel)]
pub fn ad_manager_panel(props: &AdManagerPanelProps) -> Html {
    let ads = use_state(Vec::<AdData>::new);
    let categories = use_state(Vec::<AdCategory>::new);

    let name = use_state(String::new);
    let category = use_state(String::new);
    let description = use_state(String::new);
    let link = use_state(String::new);
    let logo = use_state(String::new);
    let editing_id = use_state(|| None::<u32>);
    let error = use_state(|| None::<String>);

    let new_category = use_state(String::new);
    let new_category_color = use_state(|| CATEGORY_COLORS[0].1.to_string());

    let reload = {
        let ads = ads.clone();
        let categories = categories.clone();
        move || {
            let reg = registry();
            ads.set(reg.ads());
            categories.set(reg.categories());
        }
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload();
            || ()
        });
    }

    let clear_form = {
        let name = name.clone();
        let category = category.clone();
        let description = description.clone();
        let link = link.clone();
        let logo = logo.clone();
        let editing_id = editing_id.clone();
        let error = error.clone();
        move || {
            name.set(String::new());
            category.set(String::new());
            description.set(String::new());
            link.set(String::new());
            logo.set(String::new());
            editing_id.set(None);
            error.set(None);
        }
    };

    let on_submit = {
        let name = name.clone();
        let category = category.clone();
        let description = description.clone();
        let link = link.clone();
        let logo = logo.clone();
        let editing_id = editing_id.clone();
        let error = error.clone();
        let reload = reload.clone();
        let clear_form = clear_form.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |_: MouseEvent| {
            let draft = AdDraft {
                name: (*name).clone(),
                category: (*category).clone(),
                description: (*description).clone(),
                link: (*link).clone(),
                logo: (*logo).clone(),
            };
            let reg = registry();
            let result = match *editing_id {
                Some(id) => reg.update_ad(id, &draft).map(|_| ()),
                None => reg.create_ad(&draft).map(|_| ()),
            };
            match result {
                Ok(()) => {
                    clear_form();
                    reload();
                    on_update.emit(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    let on_add_category = {
        let new_category = new_category.clone();
        let new_category_color = new_category_color.clone();
        let error = error.clone();
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| {
            match registry().add_category(&new_category, &new_category_color) {
                Ok(_) => {
                    new_category.set(String::new());
                    error.set(None);
                    reload();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            state.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            description.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };
    let on_category = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            category.set(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };
    let on_color = {
        let new_category_color = new_category_color.clone();
        Callback::from(move |e: Event| {
            new_category_color.set(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };

    html! {
        <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.6); z-index:50;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:18px 22px; width:460px; max-height:85vh; overflow-y:auto; display:flex; flex-direction:column; gap:14px; font-size:13px;">
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <h3 style="margin:0; font-size:18px;">{"🛠 Ad Manager"}</h3>
                    <button onclick={close_cb} style={SMALL_BUTTON}>{"Close"}</button>
                </div>

                { if let Some(message) = &*error {
                    html! {
                        <div style="background:rgba(248,81,73,0.15); border:1px solid #f85149; color:#f85149; border-radius:6px; padding:8px 10px;">
                            { message.clone() }
                        </div>
                    }
                } else { html! {} } }

                <div style="display:flex; flex-direction:column; gap:8px;">
                    <div style="font-weight:600; opacity:0.8;">
                        { if editing_id.is_some() { "Edit Ad" } else { "Register New Ad" } }
                    </div>
                    <input style={INPUT_STYLE} placeholder="Brand name" value={(*name).clone()} oninput={text_input(&name)} />
                    <select style={INPUT_STYLE} onchange={on_category}>
                        <option value="" selected={category.is_empty()}>{"Pick a category"}</option>
                        { for categories.iter().map(|c| html! {
                            <option value={c.name.clone()} selected={*category == c.name}>{ &c.name }</option>
                        }) }
                    </select>
                    <textarea style={INPUT_STYLE} rows="2" placeholder="Description" value={(*description).clone()} oninput={on_description} />
                    <input style={INPUT_STYLE} placeholder="Link (https://...)" value={(*link).clone()} oninput={text_input(&link)} />
                    <input style={INPUT_STYLE} placeholder="Logo (emoji or image URL)" value={(*logo).clone()} oninput={text_input(&logo)} />
                    <div style="display:flex; gap:8px;">
                        <button onclick={on_submit} style="flex:1; padding:8px; background:#1f6feb; color:#fff; border:none; border-radius:6px; cursor:pointer; font-weight:600;">
                            { if editing_id.is_some() { "Save Changes" } else { "Register Ad" } }
                        </button>
                        { if editing_id.is_some() {
                            let clear_form = clear_form.clone();
                            html! {
                                <button onclick={Callback::from(move |_| clear_form())} style={SMALL_BUTTON}>{"Cancel"}</button>
                            }
                        } else { html! {} } }
                    </div>
                </div>

                <div style="display:flex; flex-direction:column; gap:6px;">
                    <div style="font-weight:600; opacity:0.8;">{ format!("Registered Ads ({})", ads.len()) }</div>
                    { if ads.is_empty() {
                        html! { <div style="opacity:0.5;">{"No custom ads yet. The board runs on defaults."}</div> }
                    } else { html! {} } }
                    { for ads.iter().map(|ad| {
                        let edit_cb = {
                            let ad = ad.clone();
                            let name = name.clone();
                            let category = category.clone();
                            let description = description.clone();
                            let link = link.clone();
                            let logo = logo.clone();
                            let editing_id = editing_id.clone();
                            let error = error.clone();
                            Callback::from(move |_| {
                                name.set(ad.name.clone());
                                category.set(ad.category.clone());
                                description.set(ad.description.clone());
                                link.set(ad.link.clone());
                                logo.set(ad.logo.clone());
                                editing_id.set(Some(ad.id));
                                error.set(None);
                            })
                        };
                        let delete_cb = {
                            let id = ad.id;
                            let error = error.clone();
                            let reload = reload.clone();
                            let on_update = props.on_update.clone();
                            Callback::from(move |_| {
                                match registry().delete_ad(id) {
                                    Ok(()) => {
                                        reload();
                                        on_update.emit(());
                                    }
                                    Err(e) => error.set(Some(e.to_string())),
                                }
                            })
                        };
                        html! {
                            <div style="display:flex; align-items:center; gap:8px; padding:6px 8px; background:#0d1117; border:1px solid #30363d; border-radius:6px;">
                                <span style="font-size:18px;">{ &ad.logo }</span>
                                <div style="flex:1; min-width:0;">
                                    <div style="font-weight:600; overflow:hidden; text-overflow:ellipsis; white-space:nowrap;">{ &ad.name }</div>
                                    <div style="font-size:11px; opacity:0.6;">{ &ad.category }</div>
                                </div>
                                <button onclick={edit_cb} style={SMALL_BUTTON}>{"Edit"}</button>
                                <button onclick={delete_cb} style={SMALL_BUTTON}>{"Delete"}</button>
                            </div>
                        }
                    }) }
                </div>

                <div style="display:flex; flex-direction:column; gap:6px;">
                    <div style="font-weight:600; opacity:0.8;">{"Categories"}</div>
                    <div style="display:flex; flex-wrap:wrap; gap:6px;">
                        { for categories.iter().map(|cat| {
                            let delete_cb = {
                                let cat_name = cat.name.clone();
                                let error = error.clone();
                                let reload = reload.clone();
                                Callback::from(move |_| {
                                    match registry().delete_category(&cat_name) {
                                        Ok(()) => {
                                            error.set(None);
                                            reload();
                                        }
                                        Err(e) => error.set(Some(e.to_string())),
                                    }
                                })
                            };
                            html! {
                                <span style={format!("display:inline-flex; align-items:center; gap:6px; padding:3px 8px; border-radius:10px; font-size:11px; font-weight:600; background:{}; color:#0d1117;", cat.color)}>
                                    { &cat.name }
                                    { if cat.is_custom {
                                        html! {
                                            <button onclick={delete_cb} style="background:none; border:none; cursor:pointer; font-size:11px; padding:0; color:#0d1117;">{"✕"}</button>
                                        }
                                    } else { html! {} } }
                                </span>
                            }
                        }) }
                    </div>
                    <div style="display:flex; gap:8px;">
                        <input style={format!("{} flex:1;", INPUT_STYLE)} placeholder="New category name" value={(*new_category).clone()} oninput={text_input(&new_category)} />
                        <select style={INPUT_STYLE} onchange={on_color}>
                            { for CATEGORY_COLORS.iter().map(|(label, color)| html! {
                                <option value={*color} selected={*new_category_color == *color}>{ *label }</option>
                            }) }
                        </select>
                        <button onclick={on_add_category} style={SMALL_BUTTON}>{"Add"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
