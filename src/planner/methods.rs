use rand::Rng;
use rand::rngs::ThreadRng;

use crate::planner::constants::FALLBACK_METHOD;

/// Chooses a cooking method from a food's method list.
pub trait MethodPicker {
    fn pick(&mut self, methods: &[String]) -> String;
}

/// Uniform random choice.
pub struct RandomMethodPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomMethodPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomMethodPicker<ThreadRng> {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> MethodPicker for RandomMethodPicker<R> {
    fn pick(&mut self, methods: &[String]) -> String {
        if methods.is_empty() {
            return FALLBACK_METHOD.to_string();
        }
        let idx = self.rng.gen_range(0..methods.len());
        methods[idx].clone()
    }
}

/// Always the first listed method.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstMethodPicker;

impl MethodPicker for FirstMethodPicker {
    fn pick(&mut self, methods: &[String]) -> String {
        methods
            .first()
            .cloned()
            .unwrap_or_else(|| FALLBACK_METHOD.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn methods() -> Vec<String> {
        vec!["Grilled".to_string(), "Baked".to_string(), "Poached".to_string()]
    }

    #[test]
    fn test_first_picker() {
        let mut picker = FirstMethodPicker;
        assert_eq!(picker.pick(&methods()), "Grilled");
        assert_eq!(picker.pick(&[]), FALLBACK_METHOD);
    }

    #[test]
    fn test_random_picker_stays_in_list() {
        let mut picker = RandomMethodPicker::new(StdRng::seed_from_u64(7));
        let list = methods();
        for _ in 0..50 {
            let chosen = picker.pick(&list);
            assert!(list.contains(&chosen));
        }
        assert_eq!(picker.pick(&[]), FALLBACK_METHOD);
    }
}
