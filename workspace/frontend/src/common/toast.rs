use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::settings::get_settings;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(usize),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => next.toasts.push(toast),
            ToastAction::Dismiss(id) => {
                if !next.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                next.toasts.retain(|t| t.id != id);
            }
        }
        Rc::new(next)
    }
}

/// Warnings the dashboard raises, e.g. a theme preference that could not be saved.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<String>,
}

impl ToastContext {
    pub fn show_warning(&self, message: String) {
        self.add_toast.emit(message);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);

    let add_toast = use_callback(list.dispatcher(), move |message: String, dispatcher| {
        let id = {
            let mut next_id = next_id.borrow_mut();
            *next_id += 1;
            *next_id - 1
        };
        let duration_ms = get_settings().toast_duration_ms;
        log::debug!("Showing toast #{} for {} ms", id, duration_ms);
        dispatcher.dispatch(ToastAction::Push(Toast { id, message }));

        let dispatcher = dispatcher.clone();
        Timeout::new(duration_ms, move || dispatcher.dispatch(ToastAction::Dismiss(id))).forget();
    });

    let remove_toast = {
        let dispatcher = list.dispatcher();
        Callback::from(move |id: usize| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let context = ToastContext { add_toast };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for list.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class="alert alert-warning shadow-lg">
                            <i class="fas fa-exclamation-triangle"></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: usize, message: &str) -> Toast {
        Toast {
            id,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_push_and_dismiss() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(toast(0, "first")));
        let list = list.reduce(ToastAction::Push(toast(1, "second")));

        let ids: Vec<usize> = list.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);

        let list = list.reduce(ToastAction::Dismiss(0));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].message, "second");
    }

    #[test]
    fn test_dismissing_unknown_id_is_a_no_op() {
        let list = Rc::new(ToastList::default()).reduce(ToastAction::Push(toast(0, "x")));
        let same = list.clone().reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&list, &same));
    }
}
