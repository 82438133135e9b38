pub use blood::{
    SYNTHETIC_BLOOD, SyntheticBlood, TRUE_PARAMS, gamma_variate_input, pet_frame_lengths,
    uniform_time,
};

mod blood;
