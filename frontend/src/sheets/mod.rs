pub mod side_sheet;
