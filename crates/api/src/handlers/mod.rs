pub mod badges;
pub mod criteria;
pub mod projects;
