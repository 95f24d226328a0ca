//! Control-frame codec and command types for the radio link.
//!
//! The remote packs the operator's input into a fixed 8-byte frame; the
//! robot unpacks it into a [`ControlCommand`]. Only the joystick frame
//! layout is supported: a digital-mode frame is recognised and rejected
//! without being parsed further.
use core::fmt::Display;
use core::ops::{BitOr, BitOrAssign};

/// Length of one control frame on the wire.
pub const FRAME_LEN: usize = 8;

/// Raw control frame: 5-byte mode marker, button bitmask, packed
/// direction/magnitude byte, reserved zero byte.
pub type WireFrame = [u8; FRAME_LEN];

const JOYSTICK_MARKER: [u8; 5] = [0xFF, 0x01, 0x02, 0x01, 0x02];
const DIGITAL_MARKER: [u8; 5] = [0xFF, 0x01, 0x01, 0x01, 0x02];

/// Joystick magnitude sent while any directional key is held.
const FULL_RADIUS: u8 = 7;

/// Button bitmask carried in byte 5 of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buttons(u8);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const SELECT: Buttons = Buttons(1);
    pub const START: Buttons = Buttons(2);
    pub const TRIANGLE: Buttons = Buttons(4);
    pub const CIRCLE: Buttons = Buttons(8);
    pub const CROSS: Buttons = Buttons(16);
    pub const SQUARE: Buttons = Buttons(32);

    pub const fn from_bits(bits: u8) -> Self {
        Buttons(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Buttons) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    fn bitor_assign(&mut self, rhs: Buttons) {
        self.0 |= rhs.0;
    }
}

/// Directional keys held on the remote at sampling time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionKeys {
    pub const NONE: DirectionKeys = DirectionKeys {
        forward: false,
        back: false,
        left: false,
        right: false,
    };

    pub const fn any(self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

/// Decoded operator intent. `radius == 0` means no motion was requested,
/// whatever the angle code says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlCommand {
    pub buttons: Buttons,
    pub radius: u8,
    pub angle_code: u8,
}

impl ControlCommand {
    pub const fn is_idle(&self) -> bool {
        self.radius == 0
    }

    /// Magnitude of the requested motion, fed to the gait engine as speed.
    pub const fn speed(&self) -> i8 {
        self.radius as i8
    }

    /// Commanded heading in degrees, recentered so that a plain "forward"
    /// press (code 6, 90 on the compass) steers straight ahead.
    pub fn yaw_degrees(&self) -> f32 {
        -(self.angle_code as f32 * 15.0 - 90.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The mode marker matched neither supported layout.
    MalformedFrame,
    /// Digital-mode frame, recognised but not implemented.
    UnsupportedMode,
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeError::MalformedFrame => f.write_str("unrecognised mode marker"),
            DecodeError::UnsupportedMode => f.write_str("digital mode is not supported"),
        }
    }
}

/// Pack the held buttons and directional keys into a joystick frame.
///
/// The directional combination maps to one of eight compass headings; the
/// angle travels as `heading / 15` so it fits the 5 bits left over once the
/// radius claimed the low 3. "Left" sits at 360 on the compass, which wraps
/// to code 0 on the wire.
pub fn encode(buttons: Buttons, keys: DirectionKeys) -> WireFrame {
    let heading = match (keys.forward, keys.back, keys.left, keys.right) {
        (true, _, true, _) => Some(135u16),
        (true, _, _, true) => Some(45),
        (true, _, _, _) => Some(90),
        (_, true, true, _) => Some(225),
        (_, true, _, true) => Some(315),
        (_, true, _, _) => Some(270),
        (_, _, true, _) => Some(360),
        (_, _, _, true) => Some(180),
        _ => None,
    };

    let (radius, angle_code) = match heading {
        Some(degrees) => (FULL_RADIUS, ((degrees / 15) % 24) as u8),
        None => (0, 0),
    };

    [
        JOYSTICK_MARKER[0],
        JOYSTICK_MARKER[1],
        JOYSTICK_MARKER[2],
        JOYSTICK_MARKER[3],
        JOYSTICK_MARKER[4],
        buttons.bits(),
        (angle_code << 3) | radius,
        0x00,
    ]
}

/// Unpack a received frame, checking the mode marker first.
pub fn decode(frame: &WireFrame) -> Result<ControlCommand, DecodeError> {
    if frame[..5] == DIGITAL_MARKER {
        return Err(DecodeError::UnsupportedMode);
    }
    if frame[..5] != JOYSTICK_MARKER {
        return Err(DecodeError::MalformedFrame);
    }

    Ok(ControlCommand {
        buttons: Buttons::from_bits(frame[5]),
        radius: frame[6] & 0x07,
        angle_code: frame[6] >> 3,
    })
}
