//! Core Types für die LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Animations-Modus der vier LEDs
///
/// Intern als `bool` gespeichert (`false` = Blink, `true` = Spin),
/// damit der Modus in einem `AtomicBool` liegen kann.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationMode {
    /// Toggelt die LED an der aktuellen Position
    Blink,
    /// Lässt das Licht im Kreis laufen (LED1 → LED2 → LED4 → LED3)
    Spin,
}

impl AnimationMode {
    pub const fn from_flag(spin: bool) -> Self {
        if spin { Self::Spin } else { Self::Blink }
    }

    pub const fn is_spin(self) -> bool {
        matches!(self, Self::Spin)
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Blink => Self::Spin,
            Self::Spin => Self::Blink,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blink => "blink",
            Self::Spin => "spin",
        }
    }
}

/// Die vier physischen LED-Ausgänge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Led {
    Led1,
    Led2,
    Led3,
    Led4,
}

impl Led {
    pub const ALL: [Led; 4] = [Led::Led1, Led::Led2, Led::Led3, Led::Led4];

    /// Index 0..=3 (z.B. für Arrays von GPIO-Ausgängen)
    pub const fn index(self) -> usize {
        match self {
            Led::Led1 => 0,
            Led::Led2 => 1,
            Led::Led3 => 2,
            Led::Led4 => 3,
        }
    }
}

/// Logische Position 1..=4 der Rotation
///
/// Unabhängig von der Verdrahtung: welche LED zu einer Position gehört,
/// legt die Übergangstabelle im Scheduler fest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    First,
    Second,
    Third,
    Fourth,
}

impl Position {
    /// Nächste Position im Zyklus 1 → 2 → 3 → 4 → 1
    pub const fn next(self) -> Self {
        match self {
            Position::First => Position::Second,
            Position::Second => Position::Third,
            Position::Third => Position::Fourth,
            Position::Fourth => Position::First,
        }
    }

    /// Positionsnummer 1..=4
    pub const fn number(self) -> u8 {
        match self {
            Position::First => 1,
            Position::Second => 2,
            Position::Third => 3,
            Position::Fourth => 4,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self.number() as usize - 1
    }
}

/// Logische Taster A..D
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Taster A: Blink ↔ Spin
    ToggleMode,
    /// Taster B: Delay +100 ms
    IncreaseDelay,
    /// Taster C: nicht belegt
    Reserved,
    /// Taster D: Delay -100 ms
    DecreaseDelay,
}

impl Button {
    /// Reihenfolge, in der die Masken in der `ButtonMap` registriert sind
    pub const ALL: [Button; 4] = [
        Button::ToggleMode,
        Button::IncreaseDelay,
        Button::Reserved,
        Button::DecreaseDelay,
    ];
}

/// Beobachtbare Benachrichtigung nach einer Zustandsänderung durch einen Taster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Neuer Animations-Modus
    ModeChanged(AnimationMode),
    /// Neuer Delay in Millisekunden
    DelayChanged(u32),
}

/// Ein ausgeführter LED-Übergang
///
/// Wird vom Scheduler zurückgegeben, damit Aufrufer loggen (und Tests prüfen)
/// können, welche LEDs geschrieben wurden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Position, an der der Übergang ausgeführt wurde
    pub position: Position,
    /// Modus, mit dem der Übergang ausgeführt wurde
    pub mode: AnimationMode,
    /// Diese LED wurde ausgeschaltet
    pub extinguish: Led,
    /// Diese LED wurde eingeschaltet (Spin) bzw. getoggelt (Blink)
    pub illuminate: Led,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for AnimationMode {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Led {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "LED{}", self.index() + 1)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Position {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.number())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Button {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Button::ToggleMode => defmt::write!(fmt, "A (mode)"),
            Button::IncreaseDelay => defmt::write!(fmt, "B (delay +)"),
            Button::Reserved => defmt::write!(fmt, "C (unused)"),
            Button::DecreaseDelay => defmt::write!(fmt, "D (delay -)"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ControlEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ControlEvent::ModeChanged(mode) => {
                defmt::write!(fmt, "current mode: {}", mode.as_str())
            }
            ControlEvent::DelayChanged(delay_ms) => {
                defmt::write!(fmt, "current delay: {}", delay_ms)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Transition {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Transition {{ pos: {}, mode: {}, off: {}, on: {} }}",
            self.position,
            self.mode,
            self.extinguish,
            self.illuminate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_full_cycle() {
        let mut pos = Position::First;
        for expected in [2, 3, 4, 1] {
            pos = pos.next();
            assert_eq!(pos.number(), expected);
        }
    }

    #[test]
    fn test_animation_mode_flag() {
        assert_eq!(AnimationMode::from_flag(false), AnimationMode::Blink);
        assert_eq!(AnimationMode::from_flag(true), AnimationMode::Spin);
        assert!(AnimationMode::Spin.is_spin());
        assert_eq!(AnimationMode::Blink.toggled(), AnimationMode::Spin);
    }

    #[test]
    fn test_led_index_matches_all() {
        for (i, led) in Led::ALL.iter().enumerate() {
            assert_eq!(led.index(), i);
        }
    }
}
