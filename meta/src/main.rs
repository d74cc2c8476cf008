fn main() {
    multiversx_sc_meta_lib::cli_main::<rite_of_moloch::AbiProvider>();
}
