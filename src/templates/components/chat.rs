use maud::{html, Markup};

use crate::search::controller::{ChatMessage, ChatRole};

/// Transcript plus the refine form. Submits as a GET so the page handler
/// picks the message up from the `chat` parameter.
pub fn chat_panel(messages: &[ChatMessage]) -> Markup {
    html! {
        section class="refine-chat" {
            div id="refineChatMessages" class="refine-chat__messages" {
                @for message in messages {
                    div class=(message_class(message.role)) { (message.text) }
                }
            }
            form id="refineChatForm" method="get" action="/search" {
                input id="refineChatInput" type="text" name="chat"
                    placeholder="Try: under 1.2M, 3+ beds, pool" autocomplete="off";
                button type="submit" { "Refine" }
            }
        }
    }
}

fn message_class(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "chat-message chat-message--user",
        ChatRole::Assistant => "chat-message chat-message--assistant",
    }
}
