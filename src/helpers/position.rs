use log::warn;

/// Position and length as found in the `<position>/<length>` line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionLength {
    /// Provisional position in seconds; the dump value is stale by the time
    /// it is read, so this only feeds the position tracker
    pub position: Option<u32>,
    /// Length exactly as written in the dump
    pub length: String,
}

/// Split the `<position>/<length>` line
pub fn split_position_length(position_length: &str) -> PositionLength {
    let Some((position, length)) = position_length.split_once('/') else {
        warn!("No position/length delimiter in '{}'", position_length);
        return PositionLength {
            position: None,
            length: String::new(),
        };
    };

    let position = match position.trim().parse::<u32>() {
        Ok(p) => Some(p),
        Err(e) => {
            warn!("Unparsable dump position '{}': {}", position, e);
            None
        }
    };

    PositionLength {
        position,
        length: length.to_string(),
    }
}
