use camino::{Utf8Path, Utf8PathBuf};

macro_rules! define_paths {
    ($name:ident { $($field:ident : $default:expr),* $(,)? }) => {
        #[derive(Clone, Debug)]
        pub struct $name {
            $(pub $field: Utf8PathBuf,)*
        }

        impl $name {
            pub fn to_absolute(mut self, base: &Utf8Path) -> Self {
                $(self.$field = base.join(self.$field);)*
                self
            }

            pub fn new(base: &Utf8Path) -> Self {
                Self::default().to_absolute(base)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default.into(),)*
                }
            }
        }
    };
}

// Layout written by the backup tool underneath the application root. The
// catalog and log readers depend on these names staying exactly as the tool
// produces them.
define_paths!(AppPathRules {
    backups: "loaded saves",
    logs: "logs",
});
