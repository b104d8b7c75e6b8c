use cardkkang_game::UniformSource;

/// Uniform draws from `Math.random`, or the thread RNG off the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathRandomSource;

impl UniformSource for MathRandomSource {
    fn next_unit(&mut self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Math::random()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            rand::random::<f64>()
        }
    }
}
