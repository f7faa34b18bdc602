/// Creates issuer keypairs and random attributes for each amount of attributes in `$attribute_count_range`.
#[macro_export]
macro_rules! setup_dpabc {
    ($rng: ident, $attribute_count_range: ident, $attributes_range: ident, $keypair_range: ident) => {
        // Hardcoding attribute counts. This should ideally be taken/updated from command line input
        let $attribute_count_range = [2, 4, 8, 15, 20, 30, 40, 60];
        let $attributes_range = $attribute_count_range
            .iter()
            .map(|c| (0..*c).map(|_| Fr::rand(&mut $rng)).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let $keypair_range = $attribute_count_range
            .iter()
            .map(|c| Keypair::<Bls12_381>::generate(&mut $rng, *c).unwrap())
            .collect::<Vec<_>>();
    };
}
