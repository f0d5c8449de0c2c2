use serde::{Deserialize, Serialize};

/// One recorded pointer occurrence, as written to the event stream.
///
/// Serialized as a flat JSON object tagged by `type`:
/// `{"type":"move","x":..,"y":..,"timestamp":..}` or
/// `{"type":"click","x":..,"y":..,"button":..,"pressed":..,"timestamp":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputEvent {
    Move {
        x: i64,
        y: i64,
        #[serde(rename = "timestamp")]
        timestamp_ms: u64,
    },
    Click {
        x: i64,
        y: i64,
        button: String,
        pressed: bool,
        #[serde(rename = "timestamp")]
        timestamp_ms: u64,
    },
}

impl InputEvent {
    pub fn timestamp_ms(&self) -> u64 {
        match self {
            InputEvent::Move { timestamp_ms, .. } | InputEvent::Click { timestamp_ms, .. } => {
                *timestamp_ms
            }
        }
    }
}

/// Untimestamped payload delivered by the OS hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    Move {
        x: i64,
        y: i64,
    },
    Click {
        x: i64,
        y: i64,
        button: String,
        pressed: bool,
    },
}

impl RawInput {
    /// Attach a timestamp, producing the record that goes on the wire.
    pub fn stamp(self, timestamp_ms: u64) -> InputEvent {
        match self {
            RawInput::Move { x, y } => InputEvent::Move { x, y, timestamp_ms },
            RawInput::Click {
                x,
                y,
                button,
                pressed,
            } => InputEvent::Click {
                x,
                y,
                button,
                pressed,
                timestamp_ms,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_wire_format() {
        let event = InputEvent::Move {
            x: 100,
            y: 200,
            timestamp_ms: 50,
        };
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"type":"move","x":100,"y":200,"timestamp":50}"#
        );
    }

    #[test]
    fn test_click_wire_format() {
        let event = InputEvent::Click {
            x: 10,
            y: 20,
            button: "Button.left".to_string(),
            pressed: true,
            timestamp_ms: 1234,
        };
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"type":"click","x":10,"y":20,"button":"Button.left","pressed":true,"timestamp":1234}"#
        );
    }

    #[test]
    fn test_negative_coordinates_pass_through() {
        let event = RawInput::Move { x: -1920, y: -5 }.stamp(0);
        let line = serde_json::to_string(&event).unwrap();
        assert_eq!(line, r#"{"type":"move","x":-1920,"y":-5,"timestamp":0}"#);
    }

    #[test]
    fn test_parsed_line_keeps_field_types() {
        let line = r#"{"type":"click","x":3,"y":4,"button":"Button.button8","pressed":false,"timestamp":9}"#;
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value["x"].is_i64());
        assert!(value["y"].is_i64());
        assert!(value["pressed"].is_boolean());
        assert!(value["timestamp"].is_u64());

        let event: InputEvent = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&event).unwrap(), value);
        assert_eq!(event.timestamp_ms(), 9);
    }

    #[test]
    fn test_stamp_keeps_payload() {
        let raw = RawInput::Click {
            x: 1,
            y: 2,
            button: "Button.right".to_string(),
            pressed: false,
        };
        assert_eq!(
            raw.stamp(77),
            InputEvent::Click {
                x: 1,
                y: 2,
                button: "Button.right".to_string(),
                pressed: false,
                timestamp_ms: 77,
            }
        );
    }
}
