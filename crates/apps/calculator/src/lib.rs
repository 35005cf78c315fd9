//! Calculator app: a keypad over the [`engine`] state machine.

pub mod engine;

use leptos::*;

use engine::{BinaryOp, CalcEngine, Key};

#[derive(Clone, Copy)]
struct CalcKeySpec {
    label: &'static str,
    class_name: &'static str,
    key: Key,
}

const CALC_KEYS: [CalcKeySpec; 17] = [
    CalcKeySpec {
        label: "C",
        class_name: "calc-key util danger",
        key: Key::Clear,
    },
    CalcKeySpec {
        label: "\u{00f7}",
        class_name: "calc-key operator",
        key: Key::Op(BinaryOp::Divide),
    },
    CalcKeySpec {
        label: "\u{00d7}",
        class_name: "calc-key operator",
        key: Key::Op(BinaryOp::Multiply),
    },
    CalcKeySpec {
        label: "-",
        class_name: "calc-key operator",
        key: Key::Op(BinaryOp::Subtract),
    },
    CalcKeySpec {
        label: "7",
        class_name: "calc-key digit",
        key: Key::Digit('7'),
    },
    CalcKeySpec {
        label: "8",
        class_name: "calc-key digit",
        key: Key::Digit('8'),
    },
    CalcKeySpec {
        label: "9",
        class_name: "calc-key digit",
        key: Key::Digit('9'),
    },
    CalcKeySpec {
        label: "+",
        class_name: "calc-key operator",
        key: Key::Op(BinaryOp::Add),
    },
    CalcKeySpec {
        label: "4",
        class_name: "calc-key digit",
        key: Key::Digit('4'),
    },
    CalcKeySpec {
        label: "5",
        class_name: "calc-key digit",
        key: Key::Digit('5'),
    },
    CalcKeySpec {
        label: "6",
        class_name: "calc-key digit",
        key: Key::Digit('6'),
    },
    CalcKeySpec {
        label: "=",
        class_name: "calc-key equals span-rows",
        key: Key::Equals,
    },
    CalcKeySpec {
        label: "1",
        class_name: "calc-key digit",
        key: Key::Digit('1'),
    },
    CalcKeySpec {
        label: "2",
        class_name: "calc-key digit",
        key: Key::Digit('2'),
    },
    CalcKeySpec {
        label: "3",
        class_name: "calc-key digit",
        key: Key::Digit('3'),
    },
    CalcKeySpec {
        label: "0",
        class_name: "calc-key digit span-cols",
        key: Key::Digit('0'),
    },
    CalcKeySpec {
        label: ".",
        class_name: "calc-key digit",
        key: Key::Decimal,
    },
];

#[component]
/// Calculator window contents.
pub fn CalculatorApp() -> impl IntoView {
    let engine = create_rw_signal(CalcEngine::new());

    view! {
        <div class="app app-calculator">
            <div class="calc-display" role="status">
                <div class="calc-display-value">{move || engine.get().display().to_string()}</div>
                {move || {
                    engine.get().pending().map(|(value, op)| {
                        view! {
                            <div class="calc-display-pending">
                                {engine::format_value(value)} " " {op.symbol()}
                            </div>
                        }
                    })
                }}
            </div>
            <div class="calc-keypad">
                {CALC_KEYS
                    .iter()
                    .map(|spec| {
                        let key = spec.key;
                        view! {
                            <button
                                type="button"
                                class=spec.class_name
                                on:click=move |_| engine.update(|engine| engine.press(key))
                            >
                                {spec.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
