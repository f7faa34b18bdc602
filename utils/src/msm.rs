use alloc::vec::Vec;
use ark_ec::{scalar_mul::fixed_base::FixedBase, CurveGroup, VariableBaseMSM};
use ark_ff::PrimeField;

/// The same group element is multiplied by each in `elements` using a window table
pub fn multiply_field_elems_with_same_group_elem<G: CurveGroup>(
    group_elem: G,
    elements: &[G::ScalarField],
) -> Vec<G> {
    let scalar_size = G::ScalarField::MODULUS_BIT_SIZE as usize;
    let window_size = FixedBase::get_mul_window_size(elements.len());
    let table = FixedBase::get_window_table(scalar_size, window_size, group_elem);

    FixedBase::msm(scalar_size, window_size, &table, elements)
}

/// `\sum_{i}(bases_{i} * scalars_{i})`. Extra bases or scalars are ignored.
pub fn msm_trunc<G: CurveGroup>(bases: &[G::Affine], scalars: &[G::ScalarField]) -> G {
    let len = bases.len().min(scalars.len());

    <G as VariableBaseMSM>::msm_unchecked(&bases[..len], &scalars[..len])
}
