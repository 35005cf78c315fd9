//! Notes app: a sidebar list plus a title/body editor.

pub mod model;

use leptos::*;
use system_ui::{Button, ButtonVariant, EmptyState, IconButton, IconName, TextArea, TextField};

use model::NotesModel;

#[component]
/// Notes window contents.
pub fn NotesApp() -> impl IntoView {
    let notes = create_rw_signal(NotesModel::seeded());

    let on_add = Callback::new(move |_| notes.update(|model| {
        model.add();
    }));

    view! {
        <div class="app app-notes">
            <aside class="notes-sidebar">
                <div class="notes-sidebar-actions">
                    <Button
                        variant=ButtonVariant::Accent
                        layout_class="notes-new"
                        leading_icon=IconName::Add
                        on_click=on_add
                    >
                        "New Note"
                    </Button>
                </div>
                <ul class="notes-list">
                    <For
                        each=move || notes.get().notes().to_vec()
                        key=|note| note.id
                        let:note
                    >
                        {{
                            let note_id = note.id;
                            let preview = if note.body.is_empty() {
                                "Empty note".to_string()
                            } else {
                                note.body.clone()
                            };
                            view! {
                                <li
                                    class="notes-list-item"
                                    data-selected=move || {
                                        (notes.get().selected_id() == Some(note_id)).to_string()
                                    }
                                >
                                    <button
                                        type="button"
                                        class="notes-list-select"
                                        on:click=move |_| notes.update(|model| model.select(note_id))
                                    >
                                        <span class="notes-list-title">{note.title.clone()}</span>
                                        <span class="notes-list-preview">{preview}</span>
                                    </button>
                                    <IconButton
                                        icon=IconName::Delete
                                        layout_class="notes-delete"
                                        aria_label="Delete note"
                                        on_click=Callback::new(move |_| {
                                            notes.update(|model| model.delete(note_id));
                                        })
                                    />
                                </li>
                            }
                        }}
                    </For>
                </ul>
            </aside>
            <section class="notes-editor">
                {move || {
                    let model = notes.get();
                    match model.selected_note() {
                        Some(note) => {
                            view! {
                                <div class="notes-editor-fields">
                                    <TextField
                                        layout_class="notes-title-field"
                                        placeholder="Note title..."
                                        aria_label="Note title"
                                        value=note.title.clone()
                                        on_input=Callback::new(move |ev: web_sys::Event| {
                                            notes.update(|model| {
                                                model.set_title(event_target_value(&ev));
                                            });
                                        })
                                    />
                                    <TextArea
                                        layout_class="notes-body-field"
                                        placeholder="Start typing..."
                                        aria_label="Note body"
                                        value=note.body.clone()
                                        on_input=Callback::new(move |ev: web_sys::Event| {
                                            notes.update(|model| {
                                                model.set_body(event_target_value(&ev));
                                            });
                                        })
                                    />
                                </div>
                            }
                                .into_view()
                        }
                        None => view! {
                            <EmptyState
                                title="No note selected"
                                hint="Create a new note to get started"
                            />
                        }
                            .into_view(),
                    }
                }}
            </section>
        </div>
    }
}
