/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

use callfunnel_ui::components::call_to_action::CallToAction;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <CallToAction message_ready={true} switch_number={false} />
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to install console logger");
    yew::Renderer::<App>::new().render();
}
