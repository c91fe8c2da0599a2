use std::rc::Rc;

use gloo::timers::callback::Timeout;
use indexmap::IndexMap;
use yew::{classes, html, Component, Context, Html, Properties};
use yewdux::Dispatch;

use rolodex_sdk::model::notification::{Notification, NotificationType};

type NotificationQueue = IndexMap<i64, (Rc<Notification>, Timeout)>;

/// toast host, mounted once at the app root. every store broadcast becomes
/// an entry that removes itself after its delay.
pub struct NotificationCom {
    notifications: NotificationQueue,
    next_key: i64,
    _noti_dis: Dispatch<Notification>,
}

#[derive(Clone, PartialEq, Properties)]
pub struct Props {}

pub enum Msg {
    Notification(Rc<Notification>),
    Remove(i64),
}

impl Component for NotificationCom {
    type Message = Msg;

    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let _noti_dis = Dispatch::global().subscribe_silent(ctx.link().callback(Msg::Notification));
        Self {
            notifications: NotificationQueue::new(),
            next_key: 0,
            _noti_dis,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Notification(noti) => {
                self.next_key += 1;
                let key = self.next_key;
                let ctx = ctx.link().clone();
                let timeout = Timeout::new(noti.delay, move || ctx.send_message(Msg::Remove(key)));
                self.notifications.insert(key, (noti, timeout));
                true
            }
            Msg::Remove(key) => {
                self.notifications.shift_remove(&key);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let notifications = self
            .notifications
            .iter()
            .map(|(key, (item, _))| {
                let mut class = classes!("notification-item");
                match item.type_ {
                    NotificationType::Info => class.push("info"),
                    NotificationType::Success => class.push("success"),
                    NotificationType::Error => class.push("error"),
                }
                html! {
                    <div {class} key={*key}>
                        {item.content.clone()}
                    </div>
                }
            })
            .collect::<Html>();
        html! {
            <div class="notify">
                {notifications}
            </div>
        }
    }
}
