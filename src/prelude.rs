pub use crate::{
    chart::{
        color::*,
        renderer::*,
        scale::*,
        session::*,
        surface::*,
        svg::*,
    },
    simulation::{gbm::*, params::*, random::*},
    utils::errors::*,
};
