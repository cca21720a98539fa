/*!
The subcommand registry: names (aliases included) mapped to child parsers.

Entries never own their targets; an alias and its primary registration
share the same handle. A name may be registered with no target at all,
which only becomes an error if dispatch reaches it.
*/

use crate::error::Error;
use crate::parser::Parser;

#[derive(Default)]
pub(crate) struct Commands {
    entries: Vec<(String, Option<Parser>)>,
}

impl Commands {
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register or overwrite a name.
    pub(crate) fn insert(&mut self, name: String, target: Option<Parser>) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = target,
            None => self.entries.push((name, target)),
        }
    }

    /// Register `alias` as another name for `target`'s entry, sharing its
    /// parser.
    pub(crate) fn alias(&mut self, alias: String, target: &str) -> Result<(), Error> {
        let shared = match self.entries.iter().find(|(key, _)| key.as_str() == target) {
            Some((_, shared)) => shared.clone(),
            None => return Err(Error::NoSuchCommand(target.to_owned())),
        };
        self.insert(alias, shared);
        Ok(())
    }

    /// Look up a name. The outer `Option` distinguishes "not registered"
    /// from "registered without a parser".
    pub(crate) fn find(&self, name: &str, fold: bool) -> Option<Option<Parser>> {
        self.entries
            .iter()
            .find(|(key, _)| match fold {
                true => key.eq_ignore_ascii_case(name),
                false => key.as_str() == name,
            })
            .map(|(_, target)| target.clone())
    }

    pub(crate) fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Every name whose target is `target`'s parser.
    pub(crate) fn aliases_of(&self, target: &Parser) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, t)| t.as_ref().is_some_and(|t| t.same_node(target)))
            .map(|(key, _)| key.clone())
            .collect()
    }
}
