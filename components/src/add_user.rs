use fluent::{FluentBundle, FluentResource};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use i18n::{en_us, zh_cn, LanguageType};
use icons::CloseIcon;
use rolodex_sdk::model::user::{DraftErrors, FieldError, UserDraft};
use utils::tr;

use crate::constant::{
    ADD_TITLE, CANCEL, COMPANY, COMPANY_PLACEHOLDER, EMAIL, EMAIL_INVALID, EMAIL_PLACEHOLDER,
    EMAIL_REQUIRED, NAME, NAME_PLACEHOLDER, NAME_REQUIRED, SUBMIT,
};

#[derive(Properties, Clone, PartialEq)]
pub struct AddUserProps {
    pub close: Callback<()>,
    pub submit: Callback<UserDraft>,
    pub lang: LanguageType,
}

/// modal form for a local add. submission is blocked until the
/// required-field errors clear; a valid draft is handed to the page.
pub struct AddUser {
    name_node: NodeRef,
    email_node: NodeRef,
    company_node: NodeRef,
    errors: DraftErrors,
    i18n: FluentBundle<FluentResource>,
}

pub enum AddUserMsg {
    Submit,
    Close,
    OnEscDown(KeyboardEvent),
}

impl Component for AddUser {
    type Message = AddUserMsg;

    type Properties = AddUserProps;

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

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AddUserMsg::Submit => {
                let draft = read_draft(&self.name_node, &self.email_node, &self.company_node);
                let errors = draft.validate();
                if !errors.is_clear() {
                    log::debug!("add user blocked by validation: {:?}", errors);
                    self.errors = errors;
                    return true;
                }
                self.errors = DraftErrors::default();
                ctx.props().submit.emit(draft);
                false
            }
            AddUserMsg::Close => {
                ctx.props().close.emit(());
                false
            }
            AddUserMsg::OnEscDown(event) => {
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
            AddUserMsg::Submit
        });
        let close = ctx.link().callback(|_| AddUserMsg::Close);
        let cancel = ctx.link().callback(|_| AddUserMsg::Close);
        let onkeydown = ctx.link().callback(AddUserMsg::OnEscDown);
        html! {
            <div class="modal-mask" tabindex="-1" {onkeydown}>
                <div class="modal box-shadow">
                    <div class="modal-header">
                        <h3>{tr!(self.i18n, ADD_TITLE)}</h3>
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
                            <button type="submit" class="btn primary">{tr!(self.i18n, SUBMIT)}</button>
                        </div>
                    </form>
                </div>
            </div>
        }
    }
}

/// collect the current input values into a draft
pub(crate) fn read_draft(name: &NodeRef, email: &NodeRef, company: &NodeRef) -> UserDraft {
    let name = name.cast::<HtmlInputElement>().unwrap().value();
    let email = email.cast::<HtmlInputElement>().unwrap().value();
    let company = company.cast::<HtmlInputElement>().unwrap().value();
    let company = company.trim();
    UserDraft {
        name,
        email,
        company: (!company.is_empty()).then(|| company.to_string()),
    }
}

/// inline, field-scoped error message
pub(crate) fn field_error(
    i18n: &FluentBundle<FluentResource>,
    error: Option<FieldError>,
    required_key: &str,
) -> Html {
    match error {
        Some(FieldError::Required) => {
            html!(<span class="field-error">{tr!(i18n, required_key)}</span>)
        }
        Some(FieldError::InvalidEmail) => {
            html!(<span class="field-error">{tr!(i18n, EMAIL_INVALID)}</span>)
        }
        None => html!(),
    }
}
