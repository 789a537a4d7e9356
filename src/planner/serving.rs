/// Rescale a base serving so a food's macro moves toward `target_macro`.
///
/// The scale factor is clamped to `[clamp_min, clamp_max]` and the result is
/// rounded to whole grams. A food that contributes none of the macro keeps
/// its base serving.
pub fn adjust_serving_size(
    target_macro: f64,
    actual_macro: f64,
    base_serving: f64,
    clamp_min: f64,
    clamp_max: f64,
) -> f64 {
    if actual_macro <= 0.0 || !actual_macro.is_finite() {
        return base_serving;
    }

    let ratio = (target_macro / actual_macro).max(0.0);
    (base_serving * ratio.clamp(clamp_min, clamp_max)).round()
}
