use fluent::{FluentBundle, FluentResource};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use i18n::{en_us, zh_cn, LanguageType};
use icons::CloseIcon;
use rolodex_sdk::model::user::{DraftErrors, User, UserDraft};
use utils::tr;

use crate::add_user::{field_error, read_draft};
use crate::constant::{
    CANCEL, COMPANY, COMPANY_PLACEHOLDER, EDIT_TITLE, EMAIL, EMAIL_PLACEHOLDER, EMAIL_REQUIRED,
    NAME, NAME_PLACEHOLDER, NAME_REQUIRED, UPDATE,
};

#[derive(Properties, Clone, PartialEq)]
pub struct EditUserProps {
    pub user: User,
    pub close: Callback<()>,
    pub submit: Callback<UserDraft>,
    pub lang: LanguageType,
}

/// modal form for a local quick-edit, prefilled from the targeted user.
/// emits the validated draft; merging it over the user is the page's job.
pub struct EditUser {
    name_node: NodeRef,
    email_node: NodeRef,
    company_node: NodeRef,
    errors: DraftErrors,
    i18n: FluentBundle<FluentResource>,
}

pub enum EditUserMsg {
    Submit,
    Close,
    OnEscDown(KeyboardEvent),
}

impl Component for EditUser {
    type Message = EditUserMsg;

    type Properties = EditUserProps;

    fn create(ctx: &Context<Self>) -> Self {
        let res = match ctx.props().lang {
            LanguageType::ZhCN => zh_cn::USER_FORM,
            LanguageType::EnUS => en_us::USER_FORM,
        };
        Self {
            name_node: NodeRef::default(),
            email_node: NodeRef::default(),
            company_node: NodeRef::default(),
            errors: DraftErrors::default(),
            i18n: utils::create_bundle(res),
        }
    }

    // prefill once; re-renders caused by validation must not clobber what
    // the user has typed since
    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let draft = UserDraft::from(&ctx.props().user);
        if let Some(input) = self.name_node.cast::<HtmlInputElement>() {
            input.set_value(&draft.name);
        }
        if let Some(input) = self.email_node.cast::<HtmlInputElement>() {
            input.set_value(&draft.email);
        }
        if let Some(input) = self.company_node.cast::<HtmlInputElement>() {
            input.set_value(draft.company.as_deref().unwrap_or(""));
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            EditUserMsg::Submit => {
                let draft = read_draft(&self.name_node, &self.email_node, &self.company_node);
                let errors = draft.validate();
                if !errors.is_clear() {
                    log::debug!("edit user blocked by validation: {:?}", errors);
                    self.errors = errors;
                    return true;
                }
                self.errors = DraftErrors::default();
                ctx.props().submit.emit(draft);
                false
            }
            EditUserMsg::Close => {
                ctx.props().close.emit(());
                false
            }
            EditUserMsg::OnEscDown(event) => {
                if event.key() == "Escape" {
                    ctx.props().close.emit(());
                }
                event.stop_propagation();
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            EditUserMsg::Submit
        });
        let close = ctx.link().callback(|_| EditUserMsg::Close);
        let cancel = ctx.link().callback(|_| EditUserMsg::Close);
        let onkeydown = ctx.link().callback(EditUserMsg::OnEscDown);
        html! {
            <div class="modal-mask" tabindex="-1" {onkeydown}>
                <div class="modal box-shadow">
                    <div class="modal-header">
                        <h3>{tr!(self.i18n, EDIT_TITLE)}</h3>
                        <button type="button" class="icon-btn" onclick={close}><CloseIcon /></button>
                    </div>
                    <form {onsubmit}>
                        <div class="form-field">
                            <label>{tr!(self.i18n, NAME)}</label>
                            <input
                                ref={self.name_node.clone()}
                                type="text"
                                placeholder={tr!(self.i18n, NAME_PLACEHOLDER)} />
                            {field_error(&self.i18n, self.errors.name, NAME_REQUIRED)}
                        </div>
                        <div class="form-field">
                            <label>{tr!(self.i18n, EMAIL)}</label>
                            <input
                                ref={self.email_node.clone()}
                                type="text"
                                placeholder={tr!(self.i18n, EMAIL_PLACEHOLDER)} />
                            {field_error(&self.i18n, self.errors.email, EMAIL_REQUIRED)}
                        </div>
                        <div class="form-field">
                            <label>{tr!(self.i18n, COMPANY)}</label>
                            <input
                                ref={self.company_node.clone()}
                                type="text"
                                placeholder={tr!(self.i18n, COMPANY_PLACEHOLDER)} />
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn ghost" onclick={cancel}>{tr!(self.i18n, CANCEL)}</button>
                            <button type="submit" class="btn primary">{tr!(self.i18n, UPDATE)}</button>
                        </div>
                    </form>
                </div>
            </div>
        }
    }
}
