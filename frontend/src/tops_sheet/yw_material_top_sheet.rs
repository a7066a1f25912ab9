use gloo_timers::future::TimeoutFuture;
use log::warn;
use uuid::Uuid;
use web_sys::js_sys;
use yew::platform::spawn_local;
use yew::{html, Callback, Component, Context, Html, NodeRef, Properties};

/// Matches the slide transition of the `.top-sheet` style.
const CLOSE_ANIMATION_MS: u32 = 250;

/// Sheet that slides in from the top of the page once mounted.
pub struct YwMaterialTopSheet {
    pub id: String,
    /// Between the close click and `on_close`.
    pub closing: bool,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    pub title: String,
    /// Fired once the sheet has finished sliding out.
    pub on_close: Callback<()>,
}

pub enum Msg {
    Close,
}

impl Component for YwMaterialTopSheet {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
            closing: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Close => {
                self.closing = true;
                close_top_sheet(&ctx.props().node_ref);
                let on_close = ctx.props().on_close.clone();
                spawn_local(async move {
                    TimeoutFuture::new(CLOSE_ANIMATION_MS).await;
                    on_close.emit(());
                });
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                <div class="top-sheet-header">
                    <h2>{ ctx.props().title.clone() }</h2>
                    <button class="close" onclick={ctx.link().callback(|_| Msg::Close)}>{ "Close" }</button>
                </div>
                { ctx.props().children.clone() }
            </div>
        }
    }

    /// New content while sliding out reopens the sheet; the owner ignores the
    /// pending `on_close` of the previous content.
    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        if self.closing {
            self.closing = false;
            open_top_sheet(&ctx.props().node_ref);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            open_top_sheet(&ctx.props().node_ref);
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: &NodeRef) {
    toggle_show_later(top_sheet_ref, "add");
}

pub fn close_top_sheet(top_sheet_ref: &NodeRef) {
    toggle_show_later(top_sheet_ref, "remove");
}

// Deferred so the browser has laid the sheet out before the transition starts.
fn toggle_show_later(top_sheet_ref: &NodeRef, action: &str) {
    let (Some(top_sheet), Some(window)) = (
        top_sheet_ref.cast::<web_sys::HtmlElement>(),
        web_sys::window(),
    ) else {
        return;
    };
    let func = js_sys::Function::new_no_args(&format!(
        "document.querySelector('#{}').classList.{}('show')",
        top_sheet.id(),
        action
    ));
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50)
        .is_err()
    {
        warn!("could not schedule the top sheet transition");
    }
}
