mod add_package_form;
mod loading;
mod package_table;
mod poll_button;
mod settings_panel;
mod toast;

pub use add_package_form::AddPackageForm;
pub use loading::LoadingRow;
pub use package_table::PackageTable;
pub use poll_button::PollButton;
pub use settings_panel::SettingsPanel;
pub use toast::{ToastContainer, Toasts, use_toasts};
