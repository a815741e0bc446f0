pub mod guild;
pub mod player;

pub use guild::Guild;
pub use player::Player;

/// Kill/death totals shared by players and guilds.
pub trait KillDeath {
    fn kill_count(&self) -> usize;

    fn death_count(&self) -> usize;

    /// Kill/death ratio. With no deaths the raw kill count is returned.
    fn kd(&self) -> f64 {
        ratio_or_numerator(self.kill_count(), self.death_count())
    }
}

/// `numerator / denominator`, or the numerator itself when the denominator is zero.
pub(crate) fn ratio_or_numerator(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return numerator as f64;
    }
    numerator as f64 / denominator as f64
}

/// `numerator / denominator`, or zero when the denominator is zero.
pub(crate) fn ratio_or_zero(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}
