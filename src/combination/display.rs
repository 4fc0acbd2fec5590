use std::fmt;

use crate::combination::state::Combination;

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for digit in self.digits() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}
