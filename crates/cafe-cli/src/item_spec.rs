//! `--item` argument syntax: `category:Group=opt1,opt2;Group2=opt`.
//!
//! The category alone (`drink`) adds an item with no selections. Each listed
//! option is toggled once, in order.

use std::fmt;
use std::str::FromStr;

use cafe_model::OptionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPicks {
    pub group: String,
    pub options: Vec<OptionId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub category: String,
    pub picks: Vec<GroupPicks>,
}

impl ItemSpec {
    /// `(group, option)` pairs in toggle order.
    pub fn toggles(&self) -> impl Iterator<Item = (&str, &OptionId)> {
        self.picks.iter().flat_map(|picks| {
            picks
                .options
                .iter()
                .map(move |option| (picks.group.as_str(), option))
        })
    }
}

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, rest) = match s.split_once(':') {
            Some((category, rest)) => (category.trim(), rest.trim()),
            None => (s.trim(), ""),
        };
        if category.is_empty() {
            return Err(format!("item '{s}' has no category"));
        }

        let mut picks = Vec::new();
        for part in rest.split(';').map(str::trim).filter(|part| !part.is_empty()) {
            let Some((group, options)) = part.split_once('=') else {
                return Err(format!("expected Group=option[,option] but found '{part}'"));
            };
            let group = group.trim();
            if group.is_empty() {
                return Err(format!("missing group name in '{part}'"));
            }
            let options = options
                .split(',')
                .map(str::trim)
                .filter(|option| !option.is_empty())
                .map(|option| OptionId::new(option).map_err(|err| err.to_string()))
                .collect::<Result<Vec<_>, _>>()?;
            if options.is_empty() {
                return Err(format!("group '{group}' lists no options"));
            }
            picks.push(GroupPicks {
                group: group.to_string(),
                options,
            });
        }

        Ok(Self {
            category: category.to_string(),
            picks,
        })
    }
}

impl fmt::Display for ItemSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.category)?;
        for (index, picks) in self.picks.iter().enumerate() {
            f.write_str(if index == 0 { ":" } else { ";" })?;
            let options: Vec<&str> = picks.options.iter().map(OptionId::as_str).collect();
            write!(f, "{}={}", picks.group, options.join(","))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_groups_and_options() {
        let spec: ItemSpec = "soup:Broth=chicken;Toppings=croutons, scallion"
            .parse()
            .unwrap();
        assert_eq!(spec.category, "soup");
        let toggles: Vec<(&str, &str)> = spec
            .toggles()
            .map(|(group, option)| (group, option.as_str()))
            .collect();
        assert_eq!(
            toggles,
            vec![
                ("Broth", "chicken"),
                ("Toppings", "croutons"),
                ("Toppings", "scallion"),
            ]
        );
        assert_eq!(spec.to_string(), "soup:Broth=chicken;Toppings=croutons,scallion");
    }

    #[test]
    fn group_names_may_contain_spaces() {
        let spec: ItemSpec = "sweet:Sweet Treats=cookie-chip".parse().unwrap();
        assert_eq!(spec.picks[0].group, "Sweet Treats");
    }

    #[test]
    fn category_alone_is_an_empty_item() {
        let spec: ItemSpec = "drink".parse().unwrap();
        assert!(spec.picks.is_empty());
        let spec: ItemSpec = "drink:".parse().unwrap();
        assert!(spec.picks.is_empty());
    }

    #[test]
    fn rejects_malformed_specs() {
        assert!(":Broth=chicken".parse::<ItemSpec>().is_err());
        assert!("soup:Broth".parse::<ItemSpec>().is_err());
        assert!("soup:=chicken".parse::<ItemSpec>().is_err());
        assert!("soup:Broth=,".parse::<ItemSpec>().is_err());
    }
}
