mod bundle;
mod encoder;
mod regressor;

pub use bundle::ModelBundle;
pub use encoder::LabelEncoder;
pub use regressor::{DecisionTreeRegressor, TreeNode};
