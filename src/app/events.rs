#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    SetIso(u32),
    SetAperture(f32),
    SetShutterSpeed(f32),
    SetWhiteBalance(u32),
    ApplyPreset(usize),
}
