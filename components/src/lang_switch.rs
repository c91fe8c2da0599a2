use std::rc::Rc;

use yew::prelude::*;
use yewdux::Dispatch;

use i18n::LanguageType;
use rolodex_sdk::state::I18nState;

/// language toggle in the app header; every component holding a bundle
/// rebuilds it when the store broadcasts the change
pub struct LangSwitch {
    lang: LanguageType,
    _lang_dis: Dispatch<I18nState>,
}

pub enum LangSwitchMsg {
    I18nStateChanged(Rc<I18nState>),
    Toggle,
}

impl Component for LangSwitch {
    type Message = LangSwitchMsg;

    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let _lang_dis = Dispatch::global()
            .subscribe_silent(ctx.link().callback(LangSwitchMsg::I18nStateChanged));
        Self {
            lang: _lang_dis.get().lang,
            _lang_dis,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LangSwitchMsg::I18nStateChanged(state) => {
                self.lang = state.lang;
                true
            }
            LangSwitchMsg::Toggle => {
                self._lang_dis.reduce_mut(|s| s.lang = s.lang.toggled());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(|_| LangSwitchMsg::Toggle);
        // show the language the click switches to
        let label = match self.lang {
            LanguageType::EnUS => "中文",
            LanguageType::ZhCN => "EN",
        };
        html! {
            <button class="icon-btn lang-switch" {onclick}>
                {label}
            </button>
        }
    }
}
