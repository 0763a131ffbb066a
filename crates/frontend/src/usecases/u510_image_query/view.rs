//! Image Query - View Component

use super::api::upload_image;
use super::layout::{plan, ClassesPanel, Gallery, ResultPlan, ScreenPlan, StatValue};
use super::view_model::ImageQueryVm;
use crate::shared::components::{BusyIndicator, Notice, Severity};
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u510_image_query::{ImageQuery, UPLOAD_FIELD};
use leptos::prelude::*;
use leptos::task::spawn_local;

const ACCENT: &str = "#8889CC";

#[component]
#[allow(non_snake_case)]
pub fn ImageQueryPage() -> impl IntoView {
    let vm = ImageQueryVm::new();
    let file_input = NodeRef::<leptos::html::Input>::new();

    on_cleanup(move || vm.dispose_preview());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let file = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            vm.reject_empty_submit();
            return;
        };

        let ticket = vm.begin_request();
        spawn_local(async move {
            let outcome = upload_image(&file).await;
            vm.complete_request(ticket, &file, outcome);
        });
    };

    view! {
        <div id=ImageQuery::full_name()>
            <h2 style="display: flex; align-items: center; gap: 8px; margin-bottom: 4px;">
                {icon("images")}
                {ImageQuery::display_name()}
            </h2>
            <p style="color: #6c757d; margin: 0 0 16px;">{ImageQuery::description()}</p>

            <form
                id="upload-form"
                on:submit=on_submit
                style="display: flex; flex-wrap: wrap; align-items: center; gap: 12px; margin-bottom: 16px;"
            >
                <input type="file" id="image-file" name=UPLOAD_FIELD accept="image/*" node_ref=file_input />
                <button
                    type="submit"
                    style=format!("display: inline-flex; align-items: center; gap: 6px; padding: 8px 16px; border: none; border-radius: 6px; color: #fff; background: {}; cursor: pointer;", ACCENT)
                >
                    {icon("upload")}
                    "Search similar images"
                </button>
            </form>

            {move || {
                vm.input_warning
                    .get()
                    .map(|message| view! { <Notice message=message severity=Severity::Warning /> })
            }}

            <div id="image-container">
                {move || match plan(&vm.state.get()) {
                    ScreenPlan::Blank => view! { <></> }.into_any(),
                    ScreenPlan::Busy => view! { <BusyIndicator /> }.into_any(),
                    ScreenPlan::Notice(n) => {
                        view! { <Notice message=n.message severity=n.severity /> }.into_any()
                    }
                    ScreenPlan::Results(r) => view! { <ResultView plan=r vm=vm /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn Card(#[prop(into)] title: String, icon_name: &'static str, children: Children) -> impl IntoView {
    view! {
        <div style="border: 1px solid #dee2e6; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,.08); margin-bottom: 24px; background: #fff;">
            <div style="display: flex; align-items: center; gap: 8px; padding: 10px 16px; background: #f8f9fa; border-bottom: 1px solid #dee2e6; border-radius: 8px 8px 0 0;">
                {icon(icon_name)}
                <h5 style="margin: 0;">{title}</h5>
            </div>
            <div style="padding: 16px;">{children()}</div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ResultView(plan: ResultPlan, vm: ImageQueryVm) -> impl IntoView {
    let ResultPlan {
        classes_panel,
        gallery,
        empty_notice,
    } = plan;
    let preview_src = vm.preview_src();

    view! {
        <div style="display: flex; flex-wrap: wrap; gap: 24px;">
            <div style="flex: 5 1 320px; min-width: 0;">
                <Card title="Your Uploaded Image" icon_name="image">
                    <div style="text-align: center;">
                        {preview_src
                            .map(|src| {
                                view! {
                                    <img
                                        src=src
                                        alt="Uploaded image"
                                        style="max-width: 100%; max-height: 400px; border-radius: 6px;"
                                        on:load=move |_| vm.release_preview()
                                    />
                                }
                            })}
                    </div>
                </Card>
            </div>
            <div style="flex: 7 1 420px; min-width: 0;">
                {classes_panel.map(|panel| view! { <ClassesCard panel=panel /> })}
            </div>
        </div>

        {gallery.map(|gallery| view! { <GalleryCard gallery=gallery /> })}

        {empty_notice.map(|n| view! { <Notice message=n.message severity=n.severity /> })}
    }
}

#[component]
#[allow(non_snake_case)]
fn ClassesCard(panel: ClassesPanel) -> impl IntoView {
    let stats = panel
        .stats
        .into_iter()
        .map(|stat| {
            let value = match stat.value {
                StatValue::Count(n) => n.to_string().into_any(),
                StatValue::Complete => icon("check-circle"),
            };
            view! {
                <div style="flex: 1;">
                    <h2 style=format!("color: {}; margin: 0 0 4px;", ACCENT)>{value}</h2>
                    <p style="color: #6c757d; font-size: 0.875em; margin: 0;">{stat.label}</p>
                </div>
            }
        })
        .collect_view();

    let badges = panel
        .badges
        .into_iter()
        .map(|class_name| {
            view! {
                <span style="display: inline-flex; align-items: center; gap: 4px; padding: 4px 8px; border: 1px solid #dee2e6; border-radius: 6px; background: #f8f9fa; font-size: 0.8em; font-weight: 600;">
                    {icon("tag")}
                    {class_name}
                </span>
            }
        })
        .collect_view();

    view! {
        <Card title="Detection Results" icon_name="search-plus">
            <div style="display: flex; text-align: center; margin-bottom: 24px;">{stats}</div>
            <h6 style="font-weight: bold; margin: 0 0 8px;">"Detected Classes:"</h6>
            <div style="display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 12px;">{badges}</div>
        </Card>
    }
}

#[component]
#[allow(non_snake_case)]
fn GalleryCard(gallery: Gallery) -> impl IntoView {
    let thumbnails = gallery
        .thumbnails
        .into_iter()
        .map(|thumb| {
            view! {
                <div data-image-id=thumb.id style="border: 1px solid #dee2e6; border-radius: 6px; overflow: hidden;">
                    <img
                        src=thumb.src
                        alt=thumb.alt
                        loading="lazy"
                        style="display: block; width: 100%; height: 180px; object-fit: cover;"
                    />
                    <div style="padding: 4px; text-align: center; font-size: 0.8em; color: #6c757d; background: #f8f9fa;">
                        {thumb.caption}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div style="margin-top: 24px;">
            <Card title=gallery.title icon_name="images">
                <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 16px;">
                    {thumbnails}
                </div>
            </Card>
        </div>
    }
}
