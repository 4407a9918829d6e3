use leptos::{html, prelude::*};

use crate::{
    animation,
    section::{section_class, SectionKind},
};

/// Reactive "is this section on screen" flag for the element behind `node_ref`.
///
/// Stays `false` during SSR and wherever the browser cannot observe intersections.
pub fn use_in_view(node_ref: NodeRef<html::Section>) -> ReadSignal<bool> {
    let (is_visible, set_visible) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use super::viewport::DomIntersectionHost;
        use crate::{
            section::next_reveal,
            visibility::{Threshold, VisibilityObserver},
        };

        let once = animation::config().once;
        let observer = StoredValue::new_local(None::<VisibilityObserver<DomIntersectionHost>>);

        // re-runs when the node ref fills in; attach is a no-op once watching
        Effect::new(move |_| {
            let el = node_ref.get();
            observer.update_value(|slot| {
                let obs = slot.get_or_insert_with(|| {
                    VisibilityObserver::with_listener(
                        DomIntersectionHost::default(),
                        Threshold::default(),
                        move |seen| {
                            set_visible.update(|shown| *shown = next_reveal(*shown, seen, once))
                        },
                    )
                });
                obs.attach(el.as_deref());
            });
        });

        on_cleanup(move || {
            let _ = observer.try_update_value(|slot| {
                if let Some(mut obs) = slot.take() {
                    obs.teardown();
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (node_ref, set_visible);

    is_visible
}

#[component]
pub fn SectionWrapper(kind: SectionKind, children: Children) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();
    let is_visible = use_in_view(node_ref);
    let config = animation::config();

    view! {
        <section
            node_ref=node_ref
            id=kind.anchor()
            class=move || section_class(kind.category(), is_visible.get())
            data-reveal=config.effect.as_str()
            style=config.style()
        >
            {children()}
        </section>
    }
}
