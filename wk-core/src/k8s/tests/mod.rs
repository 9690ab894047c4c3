mod status_test;

use assertables::*;
use rstest::*;
use wk_testutils::*;

use super::*;
use crate::macros::*;
use crate::prelude::*;
