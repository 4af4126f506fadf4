use yew::prelude::*;

const COLORS: [&str; 5] = ["#8c7dff", "#c6b1ff", "#6c5ce7", "#ffd166", "#ffffff"];
const PIECES: usize = 18;

/// One-shot confetti burst. Mount it to play, unmount it to dismiss.
#[function_component(Confetti)]
pub fn confetti() -> Html {
    html! {
        <div class="confetti" aria-hidden="true">
            <style>
                {r#"
                    .confetti {
                        pointer-events: none;
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                    }
                    .confetti-piece {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 8px;
                        height: 14px;
                        border-radius: 2px;
                        opacity: 0;
                        animation: confettiBurst 1.1s ease-out forwards;
                    }
                    @keyframes confettiBurst {
                        0% { opacity: 1; transform: translate(-50%, -50%) rotate(0deg); }
                        100% { opacity: 0; transform: translate(var(--dx), var(--dy)) rotate(var(--spin)); }
                    }
                "#}
            </style>
            { for (0..PIECES).map(|i| {
                let angle = i as f64 / PIECES as f64 * std::f64::consts::TAU;
                let reach = 70.0 + (i % 3) as f64 * 25.0;
                let style = format!(
                    "background: {}; --dx: {:.1}px; --dy: {:.1}px; --spin: {}deg; animation-delay: {}ms;",
                    COLORS[i % COLORS.len()],
                    angle.cos() * reach,
                    angle.sin() * reach,
                    180 + i * 40,
                    (i % 4) * 30,
                );
                html! { <span class="confetti-piece" style={style}></span> }
            }) }
        </div>
    }
}
