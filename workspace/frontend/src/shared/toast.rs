use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(usize),
}

#[derive(Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

/// Success notices only; failures are shown inside the panel that produced them.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<String>,
}

impl ToastContext {
    pub fn show_success(&self, message: String) {
        self.add_toast.emit(message);
    }
}

#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext is provided by ToastProvider")
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
    /// Auto-dismiss delay
    #[prop_or(4500)]
    pub duration_ms: u32,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);

    let add_toast = {
        let dispatcher = list.dispatcher();
        let duration_ms = props.duration_ms;

        use_callback(duration_ms, move |message: String, duration_ms| {
            let id = {
                let mut next = next_id.borrow_mut();
                *next += 1;
                *next
            };
            log::trace!("Toast #{}: {}", id, message);
            dispatcher.dispatch(ToastAction::Push(Toast { id, message }));

            let dispatcher = dispatcher.clone();
            gloo_timers::callback::Timeout::new(*duration_ms, move || {
                dispatcher.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    let context = ToastContext { add_toast };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-[60]" aria-live="polite">
                {for list.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let dispatcher = list.dispatcher();
                        Callback::from(move |_| dispatcher.dispatch(ToastAction::Dismiss(id)))
                    };

                    html! {
                        <div key={id} class="alert alert-success shadow-lg">
                            <i class="fas fa-check-circle"></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" aria-label="Dismiss" onclick={on_close}>
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

    fn toast(id: usize) -> Toast {
        Toast {
            id,
            message: format!("toast {}", id),
        }
    }

    #[test]
    fn test_push_and_dismiss() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(toast(1)));
        let list = list.reduce(ToastAction::Push(toast(2)));
        assert_eq!(list.toasts.len(), 2);

        let list = list.reduce(ToastAction::Dismiss(1));
        assert_eq!(list.toasts, vec![toast(2)]);

        let list = list.reduce(ToastAction::Dismiss(42));
        assert_eq!(list.toasts.len(), 1);
    }
}
