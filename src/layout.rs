use std::fs;

use serde::Deserialize;

use crate::{Error, Res};

/// Strip layout description, loaded from a YAML file. Panels are listed
/// left to right; all share the same dimensions.
#[derive(Debug, Clone, Deserialize)]
pub struct Layout {
    pub panel_width: i32,
    pub panel_height: i32,
    pub ports: Vec<String>,
}

pub fn load(path: &str) -> Res<Layout> {
    let data = fs::read_to_string(path)?;
    parse(&data)
}

fn parse(data: &str) -> Res<Layout> {
    let layout: Layout =
        serde_yaml::from_str(data).map_err(|err| Error::Layout(err.to_string()))?;

    if layout.panel_width <= 0 || layout.panel_height <= 0 {
        return Err(Error::Layout(format!(
            "panel size must be positive, got {}x{}",
            layout.panel_width, layout.panel_height
        )));
    }

    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() -> Res<()> {
        let layout = parse(
            "panel_width: 64\n\
             panel_height: 32\n\
             ports:\n\
             - /dev/ttyUSB0\n\
             - /dev/ttyUSB1\n",
        )?;

        assert_eq!(layout.panel_width, 64);
        assert_eq!(layout.panel_height, 32);
        assert_eq!(layout.ports, vec!["/dev/ttyUSB0", "/dev/ttyUSB1"]);
        Ok(())
    }

    #[test]
    fn test_parse_no_ports() -> Res<()> {
        // an empty strip is a valid layout
        let layout = parse("panel_width: 64\npanel_height: 32\nports: []\n")?;
        assert!(layout.ports.is_empty());
        Ok(())
    }

    #[test]
    fn test_parse_invalid_size() {
        let err = parse("panel_width: 0\npanel_height: 32\nports: []\n")
            .err()
            .unwrap();
        assert!(matches!(err, Error::Layout(_)));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse("not: [valid").is_err());
    }
}
